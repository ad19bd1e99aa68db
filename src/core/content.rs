//! Static copy shown by the menu shell: splash art, banner, intro text.
//!
//! Kept in one place so the flavor text can be tweaked without touching
//! layout code.

/// Title rendered into the header border on every page.
pub const APP_TITLE: &str = " Grimoire ";

/// Tagline centered inside the header panel.
pub const BANNER_TEXT: &str = "Chronicle your heroes before the dice hit the table";

/// Body of the "Home" page.
pub const INTRO_TEXT: &str = "\
In the lantern-lit reaches of the Ashen Vale, old roads end at older doors, \
and every door wants a name written in the ledger before it opens.

Grimoire is the table's ledger: a place to keep the party's heroes, their \
oaths, and their unfinished business. For now it holds the rules and the \
menu; the characters arrive in a later chapter.";

/// ASCII art revealed line by line on the front page.
///
/// The reveal animation walks this string with `lines()`, so the trailing
/// prompt is part of the same block and appears last.
pub const SPLASH_ART: &str = r#"
         ______________________________
        / \                            \
       |   |                            |
        \_ |      G R I M O I R E       |
           |                            |
           |     .------------------.   |
           |     |  ~  ~  ~  ~  ~   |   |
           |     |  ~  ~  ~  ~      |   |
           |     |  ~  ~            |   |
           |     '------------------'   |
           |                            |
           |   _________________________|___
           |  /                            /
           \_/____________________________/

              Welcome to Grimoire

           Press Enter to continue
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_art_ends_with_prompt() {
        let last = SPLASH_ART.lines().rev().find(|l| !l.trim().is_empty());
        assert_eq!(last.map(str::trim), Some("Press Enter to continue"));
    }

    #[test]
    fn test_intro_text_is_not_empty() {
        assert!(!INTRO_TEXT.trim().is_empty());
    }
}
