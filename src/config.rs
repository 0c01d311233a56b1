//! Fixed configuration for certificate generation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the composer needs besides the record itself: institution
/// text, asset locations, and layout constants.
///
/// `Default` carries the production values, so the composer stays a pure
/// function of record plus config with no module-level state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateConfig {
    /// Institution name printed as the top heading.
    pub institution_name: String,
    /// Accreditation and address lines printed under the institution name.
    pub approval_lines: Vec<String>,
    /// Title shown in the header row and used as the PDF document title.
    pub main_heading: String,
    /// Signature line at the bottom right.
    pub signature: String,

    /// Logo image, read once at render time; missing or undecodable is fatal.
    pub logo_path: PathBuf,
    /// Output document, overwritten if it already exists.
    pub output_path: PathBuf,

    /// Directories searched in order for a usable TTF font family. genpdf
    /// needs TTF metrics even though the document renders in built-in
    /// Helvetica.
    pub font_dirs: Vec<PathBuf>,
    /// Family names tried within each font directory.
    pub font_families: Vec<String>,

    /// Proportional scale applied to the logo's natural size.
    pub logo_scale: f64,
    /// Relative column weights for the logo / title / date header row.
    pub header_columns: Vec<usize>,
    /// Left indent of the approval block, in millimetres.
    pub approval_indent_mm: f64,

    // Font sizes in points.
    pub institution_size: u8,
    pub approval_size: u8,
    pub heading_size: u8,
    pub date_size: u8,
    pub body_size: u8,
    pub signature_size: u8,

    // Vertical gaps between blocks, in text lines.
    pub heading_gap_lines: f64,
    pub body_gap_lines: f64,
    pub signature_gap_lines: f64,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            institution_name: "St. Mary's Group Of Institutions Hyderabad".to_string(),
            approval_lines: vec![
                "Approved by AICTE & PCI, Affiliated to JNTUH & SBTET, Permitted by Govt. of T.S"
                    .to_string(),
                "Deshmukhi Village, Near Ramoji Film City, Behind Mount Opera, Hyderabad - 508284. T.S. INDIA"
                    .to_string(),
            ],
            main_heading: "Bonafied Certificate".to_string(),
            signature: "Principal".to_string(),
            logo_path: PathBuf::from("logo.png"),
            output_path: PathBuf::from("bonafide_certificate.pdf"),
            font_dirs: vec![
                PathBuf::from("fonts"),
                PathBuf::from("/usr/share/fonts/truetype/liberation"),
                PathBuf::from("/usr/share/fonts/TTF"),
                PathBuf::from("/System/Library/Fonts/Supplemental"),
                PathBuf::from("/Library/Fonts"),
            ],
            font_families: vec![
                "LiberationSans".to_string(),
                "DejaVuSans".to_string(),
                "Arial".to_string(),
            ],
            logo_scale: 0.35,
            header_columns: vec![100, 320, 100],
            approval_indent_mm: 25.0,
            institution_size: 19,
            approval_size: 8,
            heading_size: 15,
            date_size: 10,
            body_size: 12,
            signature_size: 10,
            heading_gap_lines: 0.3,
            body_gap_lines: 0.6,
            signature_gap_lines: 3.0,
        }
    }
}
