//! The built-in resume content.
//!
//! Contact lines use `Email:`/`Phone:` text labels; the embedded Latin font
//! family has no glyphs for pictograph characters.

use resume_pdf::model::{Block, Resume, Section, TextStyle};

/// Point size of the name line at the top of the page.
const NAME_SIZE_PT: u8 = 16;

/// Point size of the tagline and contact lines.
const CONTACT_SIZE_PT: u8 = 12;

/// Gap between the contact header and the first section, in millimetres.
const HEADER_GAP_MM: f64 = 10.0;

/// Builds the resume that the program renders by default.
pub fn default_resume() -> Resume {
    Resume::new()
        .with_header_block(Block::line(
            "GOKULAKANNAN KARMEGAM",
            TextStyle::new(NAME_SIZE_PT).bold(),
        ))
        .with_header_block(Block::line(
            "React.js Developer | Front-End Engineer | JavaScript Developer",
            TextStyle::new(CONTACT_SIZE_PT),
        ))
        .with_header_block(Block::line(
            "Email: karmeghamgokul@gmail.com | Phone: +91 86677 00803",
            TextStyle::new(CONTACT_SIZE_PT),
        ))
        .with_header_block(Block::line(
            "LinkedIn: linkedin.com/in/gokul-karmegham",
            TextStyle::new(CONTACT_SIZE_PT),
        ))
        .with_header_block(Block::line(
            "GitHub: github.com/gokulkarmegam",
            TextStyle::new(CONTACT_SIZE_PT),
        ))
        .with_header_block(Block::space(HEADER_GAP_MM))
        .with_section(Section::new("SUMMARY").with_block(Block::paragraph(
            "Front-End Developer skilled in building high-performance React applications \
             with reusable component libraries, responsive layouts, and measurable \
             improvements to load time and accessibility.",
            TextStyle::default(),
        )))
}

#[cfg(test)]
mod tests {
    use super::default_resume;
    use resume_pdf::model::Block;

    #[test]
    fn header_leads_with_the_name_line() {
        let resume = default_resume();
        assert_eq!(resume.display_name(), Some("GOKULAKANNAN KARMEGAM"));
        assert!(matches!(resume.header().first(), Some(Block::Line(_))));
    }

    #[test]
    fn summary_is_the_only_section() {
        let resume = default_resume();
        assert_eq!(resume.sections().len(), 1);
        assert_eq!(resume.sections()[0].title().text(), "SUMMARY");
        assert_eq!(resume.sections()[0].blocks().len(), 1);
    }
}
