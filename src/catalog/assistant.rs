//! Seed conversation and prompt shortcuts for the assistant view.

use crate::state::assistant::MessageRole;

/// Conversation shown before the student sends anything: `(role, content, time label)`.
pub const SEED_CONVERSATION: &[(MessageRole, &str, &str)] = &[
    (
        MessageRole::Assistant,
        "Hi there! I'm your AI coding assistant! 🤖 I can help you with debugging, code suggestions, explanations, and creative ideas. What would you like to work on today?",
        "2 min ago",
    ),
    (
        MessageRole::User,
        "Can you help me create a simple calculator in JavaScript?",
        "1 min ago",
    ),
    (
        MessageRole::Assistant,
        "Absolutely! I'd love to help you build a calculator. Let me create a simple yet functional calculator with HTML, CSS, and JavaScript. Here's what we'll include:\n\n• Basic arithmetic operations (+, -, ×, ÷)\n• Clear and equals functionality\n• Responsive design\n• Error handling\n\nWould you like me to start with the HTML structure?",
        "just now",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickPrompt {
    pub label: &'static str,
    pub icon: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_PROMPTS: &[QuickPrompt] = &[
    QuickPrompt { label: "Debug Code", icon: "🐛", prompt: "I have a bug in my code, can you help me fix it?" },
    QuickPrompt {
        label: "Get Ideas",
        icon: "💡",
        prompt: "Can you suggest some creative project ideas for a beginner?",
    },
    QuickPrompt { label: "Explain Code", icon: "💻", prompt: "Can you explain how this code works?" },
    QuickPrompt { label: "Optimize", icon: "✨", prompt: "How can I make this code better and more efficient?" },
];

/// Capability list in the sidebar: `(feature, description)`.
pub const FEATURES: &[(&str, &str)] = &[
    ("Code Generation", "Write code from descriptions"),
    ("Bug Detection", "Find and fix errors automatically"),
    ("Code Explanation", "Understand complex code easily"),
    ("Best Practices", "Learn industry standards"),
    ("Project Ideas", "Get creative suggestions"),
];
