//! Certificate composition and rendering.
//!
//! Split into pure text derivation, which is testable without any assets,
//! and the genpdf assembly that turns the derived text plus the config
//! constants into a one-page PDF.

use std::fs;
use std::path::Path;

use genpdf::{elements, fonts, style, Alignment, Element, Margins, PaperSize, Scale};
use tracing::{debug, info};

use crate::config::CertificateConfig;
use crate::error::{Error, Result};
use crate::record::CertificateRecord;

/// Ordinal suffix for the year of study: `th` past the third year, `rd`
/// otherwise. Years 1-3 all print `rd`, the first and second included; the
/// issued certificates carry exactly this wording.
pub fn year_suffix(year: &str) -> &'static str {
    match year.parse::<u32>() {
        Ok(y) if y > 3 => "th",
        _ => "rd",
    }
}

/// Ordinal suffix for the semester: `th` past semester 3, `nd` otherwise.
/// Validated semesters are only ever 1 or 2, so this always yields `nd`.
pub fn semester_suffix(semester: &str) -> &'static str {
    match semester.parse::<u32>() {
        Ok(s) if s > 3 => "th",
        _ => "nd",
    }
}

/// The combined study-period label, e.g. `3rd Year - 2nd Semester`.
pub fn semester_year(record: &CertificateRecord) -> String {
    format!(
        "{}{} Year - {}{} Semester",
        record.year,
        year_suffix(&record.year),
        record.semester,
        semester_suffix(&record.semester)
    )
}

/// The certificate paragraph: the record interpolated into the fixed
/// wording, spelling and spacing included.
pub fn certificate_text(record: &CertificateRecord) -> String {
    format!(
        "This is to certify that Mr/Miss {} S/o,D/o.Sri {} is/was a bonafied student of \
         this college bearing roll number {}, Studying/ has studied  {} of M.tech /B.tech \
         /M.Pharmacy /B.Pharmacy /MBA /MCA /Diploma in the branch of {} for the academic \
         year/years {}",
        record.name,
        record.fathers_name,
        record.roll_number,
        semester_year(record),
        record.branch,
        record.academic_year
    )
}

/// The header cell echoing the date exactly as entered.
pub fn date_label(record: &CertificateRecord) -> String {
    format!("Date: {}", record.date)
}

/// Validates the record, builds the one-page document, and writes it to the
/// configured output path.
///
/// Rendering goes to a temporary path that is renamed into place, so a
/// failed render cannot truncate a previously generated certificate. The
/// temporary file is left behind on failure.
pub fn render_certificate(record: &CertificateRecord, config: &CertificateConfig) -> Result<()> {
    record.validate()?;
    debug!("composing certificate document");

    let logo = load_logo(config)?;
    let font_family = resolve_font_family(config)?;
    let doc = build_document(record, config, font_family, logo)?;

    write_document(doc, &config.output_path)?;
    info!("certificate written to {}", config.output_path.display());
    Ok(())
}

/// Loads and scales the logo. The logo is read before the fonts so that a
/// missing asset gets its own diagnostic.
fn load_logo(config: &CertificateConfig) -> Result<elements::Image> {
    let image = elements::Image::from_path(&config.logo_path).map_err(|e| {
        Error::Asset(format!(
            "failed to load logo image {}: {e}",
            config.logo_path.display()
        ))
    })?;
    Ok(image
        .with_alignment(Alignment::Left)
        .with_scale(Scale::new(config.logo_scale, config.logo_scale)))
}

/// Finds the first usable TTF family across the configured search
/// directories. The document renders in built-in Helvetica; the TTF files
/// only supply text metrics.
fn resolve_font_family(config: &CertificateConfig) -> Result<fonts::FontFamily<fonts::FontData>> {
    for dir in &config.font_dirs {
        if !dir.is_dir() {
            continue;
        }
        for family in &config.font_families {
            if let Ok(family_data) = fonts::from_files(dir, family, Some(fonts::Builtin::Helvetica))
            {
                debug!("using font family {} from {}", family, dir.display());
                return Ok(family_data);
            }
        }
    }
    Err(Error::Font(format!(
        "no usable TTF font family found (searched {}); install fonts-liberation or place \
         LiberationSans-*.ttf under ./fonts",
        config
            .font_dirs
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

fn build_document(
    record: &CertificateRecord,
    config: &CertificateConfig,
    font_family: fonts::FontFamily<fonts::FontData>,
    logo: elements::Image,
) -> Result<genpdf::Document> {
    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(config.main_heading.as_str());
    doc.set_paper_size(PaperSize::Letter);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(
        elements::Paragraph::new(config.institution_name.as_str())
            .aligned(Alignment::Center)
            .styled(
                style::Style::new()
                    .bold()
                    .with_font_size(config.institution_size),
            ),
    );
    doc.push(elements::Break::new(config.heading_gap_lines));

    for line in &config.approval_lines {
        doc.push(
            elements::Paragraph::new(line.as_str())
                .styled(style::Style::new().with_font_size(config.approval_size))
                .padded(Margins::trbl(0.0, 0.0, 0.0, config.approval_indent_mm)),
        );
    }
    doc.push(elements::Break::new(config.body_gap_lines));

    // Logo, centered title, right-aligned date on a single frameless row.
    let mut header = elements::TableLayout::new(config.header_columns.clone());
    header.set_cell_decorator(elements::FrameCellDecorator::new(false, false, false));
    header
        .row()
        .element(logo)
        .element(
            elements::Paragraph::new(config.main_heading.as_str())
                .aligned(Alignment::Center)
                .styled(style::Style::new().bold().with_font_size(config.heading_size)),
        )
        .element(
            elements::Paragraph::new(date_label(record))
                .aligned(Alignment::Right)
                .styled(style::Style::new().bold().with_font_size(config.date_size)),
        )
        .push()?;
    doc.push(header);

    doc.push(elements::Break::new(config.body_gap_lines));
    doc.push(
        elements::Paragraph::new(certificate_text(record))
            .styled(style::Style::new().bold().with_font_size(config.body_size)),
    );

    doc.push(elements::Break::new(config.signature_gap_lines));
    doc.push(
        elements::Paragraph::new(config.signature.as_str())
            .aligned(Alignment::Right)
            .styled(
                style::Style::new()
                    .bold()
                    .with_font_size(config.signature_size),
            ),
    );

    Ok(doc)
}

fn write_document(doc: genpdf::Document, output_path: &Path) -> Result<()> {
    // Render to a temp file first, then rename, so a failed render cannot
    // clobber an existing certificate.
    let temp_path = output_path.with_extension("pdf.tmp");
    doc.render_to_file(&temp_path)?;
    fs::rename(&temp_path, output_path)?;
    Ok(())
}
