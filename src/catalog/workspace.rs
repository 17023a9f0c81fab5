//! Sample projects and starter code shown in the project workspace.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::state::workspace::EditorTab;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Draft,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Completed => "Completed",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Active => "status--active",
            Self::Draft => "status--draft",
            Self::Completed => "status--completed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkspaceProject {
    pub name: &'static str,
    pub tech: &'static str,
    pub status: ProjectStatus,
}

pub const PROJECTS: &[WorkspaceProject] = &[
    WorkspaceProject { name: "Portfolio Website", tech: "React", status: ProjectStatus::Active },
    WorkspaceProject { name: "Calculator App", tech: "Vanilla JS", status: ProjectStatus::Draft },
    WorkspaceProject { name: "Todo List", tech: "Python", status: ProjectStatus::Completed },
    WorkspaceProject { name: "Weather App", tech: "React", status: ProjectStatus::Draft },
];

const HTML_SAMPLE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Awesome Project</title>
</head>
<body>
    <div class="container">
        <h1 class="title">🚀 Welcome to My Project!</h1>
        <p class="description">This is an amazing project built with CodeCraft Academy!</p>
        <button class="btn" onclick="celebrate()">Click me!</button>
        <div id="output"></div>
    </div>
</body>
</html>"#;

const CSS_SAMPLE: &str = r#".container {
    max-width: 600px;
    margin: 0 auto;
    padding: 2rem;
    text-align: center;
    font-family: -apple-system, BlinkMacSystemFont, sans-serif;
}

.title {
    font-size: 2.5rem;
    color: #8B5CF6;
    margin-bottom: 1rem;
    animation: bounce 2s infinite;
}

.description {
    font-size: 1.2rem;
    color: #6B7280;
    margin-bottom: 2rem;
}

.btn {
    background: linear-gradient(135deg, #8B5CF6, #3B82F6);
    color: white;
    border: none;
    padding: 1rem 2rem;
    border-radius: 1rem;
    font-size: 1.1rem;
    cursor: pointer;
    transition: transform 0.2s;
}

.btn:hover {
    transform: scale(1.05);
}

@keyframes bounce {
    0%, 20%, 50%, 80%, 100% { transform: translateY(0); }
    40% { transform: translateY(-10px); }
    60% { transform: translateY(-5px); }
}"#;

const JS_SAMPLE: &str = r#"function celebrate() {
    const output = document.getElementById('output');
    const emojis = ['🎉', '🎊', '🚀', '✨', '🌟', '💫', '🎈', '🎆'];

    output.innerHTML = '';

    for (let i = 0; i < 20; i++) {
        setTimeout(() => {
            const emoji = document.createElement('span');
            emoji.textContent = emojis[Math.floor(Math.random() * emojis.length)];
            emoji.style.position = 'absolute';
            emoji.style.left = Math.random() * 100 + '%';
            emoji.style.fontSize = '2rem';
            emoji.style.animation = 'fall 3s linear forwards';

            output.style.position = 'relative';
            output.appendChild(emoji);

            setTimeout(() => emoji.remove(), 3000);
        }, i * 100);
    }

    if (!document.getElementById('celebration-styles')) {
        const style = document.createElement('style');
        style.id = 'celebration-styles';
        style.textContent = `
            @keyframes fall {
                to {
                    transform: translateY(200px) rotate(360deg);
                    opacity: 0;
                }
            }
        `;
        document.head.appendChild(style);
    }
}"#;

/// Read-only starter code for an editor tab.
pub fn code_sample(tab: EditorTab) -> &'static str {
    match tab {
        EditorTab::Html => HTML_SAMPLE,
        EditorTab::Css => CSS_SAMPLE,
        EditorTab::Js => JS_SAMPLE,
    }
}
