use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn section_default_is_home() {
    assert_eq!(Section::default(), Section::Home);
}

#[test]
fn section_ids_parse_back() {
    for section in Section::ALL {
        assert_eq!(section.as_str().parse::<Section>(), Ok(section));
    }
}

#[test]
fn section_from_str_rejects_unknown_id() {
    assert_eq!("settings".parse::<Section>(), Err(UnknownSection("settings".to_owned())));
    assert_eq!("Dashboard".parse::<Section>(), Err(UnknownSection("Dashboard".to_owned())));
}

#[test]
fn parse_or_home_falls_back() {
    assert_eq!(Section::parse_or_home("creative"), Section::Creative);
    assert_eq!(Section::parse_or_home("nope"), Section::Home);
    assert_eq!(Section::parse_or_home(""), Section::Home);
}

#[test]
fn only_home_is_public() {
    let public: Vec<Section> = Section::ALL.into_iter().filter(|s| !s.is_protected()).collect();
    assert_eq!(public, vec![Section::Home]);
}

#[test]
fn section_labels() {
    assert_eq!(Section::Ai.label(), "AI Helper");
    assert_eq!(Section::Projects.to_string(), "projects");
}

// =============================================================
// screen_for
// =============================================================

#[test]
fn anonymous_protected_sections_show_auth_prompt() {
    for section in Section::ALL.into_iter().filter(|s| s.is_protected()) {
        assert_eq!(screen_for(section, false), Screen::AuthPrompt(section));
    }
}

#[test]
fn anonymous_home_shows_landing() {
    assert_eq!(screen_for(Section::Home, false), Screen::Landing);
}

#[test]
fn authenticated_sections_map_to_views() {
    assert_eq!(screen_for(Section::Home, true), Screen::Landing);
    assert_eq!(screen_for(Section::Dashboard, true), Screen::Dashboard);
    assert_eq!(screen_for(Section::Projects, true), Screen::Workspace);
    assert_eq!(screen_for(Section::Ai, true), Screen::Assistant);
    assert_eq!(screen_for(Section::Creative, true), Screen::Library);
}

#[test]
fn protected_sections_wait_while_restoring() {
    assert_eq!(screen_while_restoring(Section::Home), Screen::Landing);
    for section in [Section::Dashboard, Section::Projects, Section::Ai, Section::Creative] {
        assert_eq!(screen_while_restoring(section), Screen::Restoring);
    }
}

// =============================================================
// SectionRouter
// =============================================================

#[test]
fn router_starts_home_and_navigates() {
    let mut router = SectionRouter::default();
    assert_eq!(router.active(), Section::Home);
    router.navigate(Section::Creative);
    assert_eq!(router.active(), Section::Creative);
    assert_eq!(router.screen(true), Screen::Library);
    assert_eq!(router.screen(false), Screen::AuthPrompt(Section::Creative));
}

#[test]
fn router_reset_returns_home() {
    let mut router = SectionRouter::default();
    router.navigate(Section::Ai);
    router.reset();
    assert_eq!(router.active(), Section::Home);
}
