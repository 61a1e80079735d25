//! Document composition for the resume_pdf crate.
//!
//! [`ResumeComposer`] turns a [`Resume`] content model into PDF bytes.  It is
//! a pure transformation: font discovery happens through [`crate::fonts`],
//! and no environment or filesystem state is touched here.

use std::fmt;

use genpdf::elements::Paragraph;
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Margins, Size, SimplePageDecorator};

use crate::elements::VerticalSpace;
use crate::fonts;
use crate::model::{Block, HorizontalAlignment, LineBlock, ParagraphBlock, Resume, TextStyle};

/// Uniform page margin applied when the caller does not override it.
const DEFAULT_MARGIN_MM: f64 = 10.0;

/// Errors produced while composing the document.
#[derive(Debug)]
pub enum ComposeError {
    /// The embedded font family could not be located or parsed.
    FontLoad(genpdf::error::Error),
    /// The page-layout crate failed while serializing the document.
    Render(genpdf::error::Error),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad(err) => write!(f, "Failed to load fonts: {err}"),
            Self::Render(err) => write!(f, "Failed to render document: {err}"),
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FontLoad(err) | Self::Render(err) => Some(err),
        }
    }
}

/// A rendered document held in memory, ready to be written by the caller.
pub struct RenderedPdf {
    /// The serialized PDF bytes.
    pub bytes: Vec<u8>,
}

/// Builder for rendered resumes, pre-configured with the crate defaults.
#[derive(Default)]
pub struct ResumeComposer {
    paper_size: Option<Size>,
    margins: Option<Margins>,
}

impl ResumeComposer {
    /// Creates a composer with default settings (A4 paper, 10 mm margins).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for the document.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Renders the resume into an in-memory PDF.
    pub fn compose(&self, resume: &Resume) -> Result<RenderedPdf, ComposeError> {
        let font_family = fonts::default_font_family().map_err(ComposeError::FontLoad)?;
        let mut document = genpdf::Document::new(font_family);

        if let Some(name) = resume.display_name() {
            document.set_title(name);
        }

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins.unwrap_or_else(|| Margins::all(DEFAULT_MARGIN_MM)));
        document.set_page_decorator(decorator);

        for block in resume.header() {
            push_block(&mut document, block);
        }

        for section in resume.sections() {
            push_line(&mut document, section.title());
            for block in section.blocks() {
                push_block(&mut document, block);
            }
        }

        let mut bytes = Vec::new();
        document
            .render(&mut bytes)
            .map_err(ComposeError::Render)?;
        Ok(RenderedPdf { bytes })
    }
}

fn push_block(document: &mut genpdf::Document, block: &Block) {
    match block {
        Block::Line(line) => push_line(document, line),
        Block::Paragraph(paragraph) => push_paragraph(document, paragraph),
        Block::Space(height_mm) => document.push(VerticalSpace::new(*height_mm)),
    }
}

fn push_line(document: &mut genpdf::Document, line: &LineBlock) {
    let styled = StyledString::new(line.text().to_owned(), style_for(line.style()));
    let mut paragraph = Paragraph::new(styled);
    paragraph.set_alignment(alignment_for(line.alignment()));
    document.push(paragraph);
}

fn push_paragraph(document: &mut genpdf::Document, block: &ParagraphBlock) {
    let styled = StyledString::new(block.text().to_owned(), style_for(block.style()));
    document.push(Paragraph::new(styled));
}

fn style_for(style: TextStyle) -> Style {
    let mut result = Style::new();
    result.set_font_size(style.size_pt());
    if style.is_bold() {
        result.set_bold();
    }
    result
}

fn alignment_for(alignment: HorizontalAlignment) -> Alignment {
    match alignment {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::{alignment_for, style_for};
    use crate::model::{HorizontalAlignment, TextStyle};
    use genpdf::Alignment;

    #[test]
    fn style_mapping_carries_size_and_weight() {
        let style = style_for(TextStyle::new(16).bold());
        assert_eq!(style.font_size(), 16);
        assert!(style.is_bold());

        let regular = style_for(TextStyle::new(11));
        assert!(!regular.is_bold());
    }

    #[test]
    fn alignment_mapping_is_exhaustive() {
        assert!(matches!(
            alignment_for(HorizontalAlignment::Left),
            Alignment::Left
        ));
        assert!(matches!(
            alignment_for(HorizontalAlignment::Center),
            Alignment::Center
        ));
        assert!(matches!(
            alignment_for(HorizontalAlignment::Right),
            Alignment::Right
        ));
    }
}
