//! Data structures describing the logical content of the resume.
//!
//! The types in this module form the content model consumed by
//! [`crate::composer`].  They intentionally avoid referencing the rendering
//! crate so the values can be built by callers, inspected in tests, or reused
//! with synthetic content without pulling in the PDF stack.

/// Default point size for body text.
pub const DEFAULT_BODY_SIZE_PT: u8 = 11;

/// Default point size for section titles.
pub const SECTION_TITLE_SIZE_PT: u8 = 14;

/// Horizontal placement of a single-line cell.
///
/// The variants map directly to [`genpdf::Alignment`] and are stored as a
/// small enum so the model stays independent of the rendering crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

/// Font specification applied to a block of text: point size plus a weight
/// flag.  The font family itself is resolved by [`crate::fonts`] and is not
/// part of the content model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    size_pt: u8,
    bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_pt: DEFAULT_BODY_SIZE_PT,
            bold: false,
        }
    }
}

impl TextStyle {
    /// Creates a regular-weight style with the given point size.
    pub fn new(size_pt: u8) -> Self {
        Self {
            size_pt,
            bold: false,
        }
    }

    /// Returns the point size.
    pub fn size_pt(&self) -> u8 {
        self.size_pt
    }

    /// Returns whether the text is rendered in the bold face.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Marks the style as bold and returns the updated style.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A single-line text cell with a style and horizontal alignment.
///
/// The cell always advances the cursor to the next line once emitted; text
/// wider than the printable area is not wrapped.
#[derive(Clone, Debug, PartialEq)]
pub struct LineBlock {
    text: String,
    style: TextStyle,
    alignment: HorizontalAlignment,
}

impl LineBlock {
    /// Creates a left-aligned line with the provided text and style.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            alignment: HorizontalAlignment::default(),
        }
    }

    /// Returns the literal text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the font specification.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Returns the horizontal alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the alignment and returns the updated line.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// A wrapping text block spanning the full printable width.
///
/// The renderer breaks the text across as many lines as needed.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphBlock {
    text: String,
    style: TextStyle,
}

impl ParagraphBlock {
    /// Creates a wrapping block with the provided text and style.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Returns the literal text of the block.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the font specification.
    pub fn style(&self) -> TextStyle {
        self.style
    }
}

/// Individual emission primitives that make up the header and the sections.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Single-line text cell.
    Line(LineBlock),
    /// Wrapping multi-line text.
    Paragraph(ParagraphBlock),
    /// Vertical gap in millimetres; emits no content.
    Space(f64),
}

impl Block {
    /// Convenience helper for building a line block.
    pub fn line(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Line(LineBlock::new(text, style))
    }

    /// Convenience helper for building a wrapping paragraph block.
    pub fn paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Paragraph(ParagraphBlock::new(text, style))
    }

    /// Convenience helper that yields a vertical gap of `height_mm`.
    pub fn space(height_mm: f64) -> Self {
        Self::Space(height_mm)
    }
}

/// A resume section: a title line followed by body blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    title: LineBlock,
    blocks: Vec<Block>,
}

impl Section {
    /// Creates a section whose title uses the default bold title style.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: LineBlock::new(title, TextStyle::new(SECTION_TITLE_SIZE_PT).bold()),
            blocks: Vec::new(),
        }
    }

    /// Returns the title line.
    pub fn title(&self) -> &LineBlock {
        &self.title
    }

    /// Returns the body blocks in emission order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Replaces the title style and returns the updated section.
    pub fn with_title_style(mut self, style: TextStyle) -> Self {
        self.title.style = style;
        self
    }

    /// Appends a body block and returns the updated section.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the section with multiple body blocks.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }
}

/// The whole document: ordered header blocks followed by ordered sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resume {
    header: Vec<Block>,
    sections: Vec<Section>,
}

impl Resume {
    /// Creates an empty resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the header blocks in emission order.
    pub fn header(&self) -> &[Block] {
        &self.header
    }

    /// Returns the sections in emission order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the text of the first header line, used for PDF title metadata.
    pub fn display_name(&self) -> Option<&str> {
        self.header.iter().find_map(|block| match block {
            Block::Line(line) => Some(line.text()),
            _ => None,
        })
    }

    /// Appends a header block and returns the updated resume.
    pub fn with_header_block(mut self, block: Block) -> Self {
        self.header.push(block);
        self
    }

    /// Appends a section and returns the updated resume.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}
