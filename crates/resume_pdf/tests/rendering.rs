use resume_pdf::composer::ResumeComposer;
use resume_pdf::fonts;
use resume_pdf::model::{Block, Resume, Section, TextStyle};
use sha2::{Digest, Sha256};

fn sample_resume() -> Resume {
    Resume::new()
        .with_header_block(Block::line("JANE DOE", TextStyle::new(16).bold()))
        .with_header_block(Block::line("Systems Engineer", TextStyle::new(12)))
        .with_header_block(Block::space(10.0))
        .with_section(Section::new("SUMMARY").with_block(Block::paragraph(
            "Engineer with a focus on reliable infrastructure and small, well-tested tools.",
            TextStyle::default(),
        )))
}

fn render(resume: &Resume) -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping rendering assertions: bundled fonts missing. Set {} or copy the \
             Arimo faces into assets/fonts.",
            fonts::FONTS_DIR_ENV_VAR
        );
        return None;
    }

    let pdf = ResumeComposer::new()
        .compose(resume)
        .expect("compose sample resume");
    Some(pdf.bytes)
}

// Byte ranges rewritten on every render: timestamps and generated document
// identifiers, in both the info dictionary and the XMP metadata stream.
const VOLATILE_SPANS: &[(&[u8], &[u8])] = &[
    (b"/CreationDate(", b")"),
    (b"/ModDate(", b")"),
    (b"/Producer(", b")"),
    (b"/ID[", b"]"),
    (b"<xmp:CreateDate>", b"</xmp:CreateDate>"),
    (b"<xmp:ModifyDate>", b"</xmp:ModifyDate>"),
    (b"<xmp:MetadataDate>", b"</xmp:MetadataDate>"),
    (b"<xmpMM:DocumentID>", b"</xmpMM:DocumentID>"),
    (b"<xmpMM:InstanceID>", b"</xmpMM:InstanceID>"),
    (b"<xmpMM:VersionID>", b"</xmpMM:VersionID>"),
];

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

fn blank_volatile_metadata(bytes: &mut [u8]) {
    for (start, end) in VOLATILE_SPANS {
        let mut cursor = 0;
        while let Some(open) = find(bytes, start, cursor) {
            let begin = open + start.len();
            let Some(stop) = find(bytes, end, begin) else {
                break;
            };
            for byte in &mut bytes[begin..stop] {
                *byte = b'0';
            }
            cursor = stop + end.len();
        }
    }
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let mut normalized = bytes.to_vec();
    blank_volatile_metadata(&mut normalized);
    Sha256::digest(&normalized).into()
}

#[test]
fn output_starts_with_pdf_magic() {
    let Some(bytes) = render(&sample_resume()) else {
        return;
    };
    assert!(bytes.starts_with(b"%PDF"), "missing PDF magic header");
    assert!(bytes.len() > 1024, "output suspiciously small");
}

#[test]
fn output_contains_exactly_one_page() {
    let Some(bytes) = render(&sample_resume()) else {
        return;
    };
    let document = lopdf::Document::load_mem(&bytes).expect("reparse rendered PDF");
    assert_eq!(document.get_pages().len(), 1);
}

#[test]
fn rendering_is_deterministic() {
    let resume = sample_resume();
    let (Some(bytes_a), Some(bytes_b)) = (render(&resume), render(&resume)) else {
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "renders must be identical after metadata normalization"
    );
}

#[test]
fn synthetic_multi_section_resume_renders() {
    let resume = Resume::new()
        .with_header_block(Block::line("A B TESTER", TextStyle::new(16).bold()))
        .with_header_block(Block::space(8.0))
        .with_section(Section::new("EXPERIENCE").with_blocks([
            Block::paragraph("Shipped things.", TextStyle::default()),
            Block::space(4.0),
            Block::paragraph("Maintained other things.", TextStyle::default()),
        ]))
        .with_section(
            Section::new("SKILLS")
                .with_block(Block::paragraph("Rust, PDF plumbing.", TextStyle::default())),
        )
        .with_section(
            Section::new("EDUCATION")
                .with_block(Block::paragraph("School of examples.", TextStyle::default())),
        );

    let Some(bytes) = render(&resume) else {
        return;
    };
    assert!(bytes.starts_with(b"%PDF"));
}
