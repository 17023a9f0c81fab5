use super::*;

#[test]
fn footer_has_three_columns_of_five() {
    let titles: Vec<&str> = LINK_COLUMNS.iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Learn", "Create", "Support"]);
    assert!(LINK_COLUMNS.iter().all(|c| c.links.len() == 5));
}

#[test]
fn social_urls() {
    assert_eq!(SocialLink::Github.url(), "https://github.com/codecraft-academy");
    assert_eq!(SocialLink::Mail.url(), "mailto:hello@codecraft.academy");
}

#[test]
fn navigation_message_format() {
    assert_eq!(navigation_message("Help Center"), "Navigating to Help Center...");
}
