use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
}

impl PageFormat {
    /// Paper size in inches, portrait.
    pub fn size_in(&self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (8.27, 11.69),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[allow(dead_code)]
    Landscape,
}

/// Fixed conversion settings handed to the document converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOptions {
    pub format: PageFormat,
    pub orientation: Orientation,
    /// Top, right, bottom, left, in inches.
    pub margins_in: [f32; 4],
    pub raster_scale: f32,
    pub allow_cross_origin_images: bool,
    pub image_quality: f32,
    pub compress: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            margins_in: [0.5; 4],
            raster_scale: 2.0,
            allow_cross_origin_images: true,
            image_quality: 0.98,
            compress: true,
        }
    }
}

/// `"<fullName or 'Resume'>_Resume.pdf"`.
///
/// Characters that common filesystems reject (`/ \ : * ? " < > |` and control
/// characters) become `_`; everything else, spaces and non-ASCII included,
/// passes through.
pub fn export_filename(full_name: &str) -> String {
    let name = full_name.trim();
    let base = if name.is_empty() { "Resume" } else { name };
    let safe: String = base
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{safe}_Resume.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_uses_full_name() {
        assert_eq!(export_filename("Jane Doe"), "Jane Doe_Resume.pdf");
    }

    #[test]
    fn test_filename_falls_back_to_resume() {
        assert_eq!(export_filename(""), "Resume_Resume.pdf");
        assert_eq!(export_filename("   "), "Resume_Resume.pdf");
    }

    #[test]
    fn test_filename_replaces_path_and_reserved_characters() {
        assert_eq!(export_filename("../etc/passwd"), ".._etc_passwd_Resume.pdf");
        assert_eq!(export_filename("A:B*C?\"D\"|E"), "A_B_C__D__E_Resume.pdf");
        assert_eq!(export_filename("Line\nBreak"), "Line_Break_Resume.pdf");
    }

    #[test]
    fn test_filename_keeps_non_ascii() {
        assert_eq!(export_filename("José Müller"), "José Müller_Resume.pdf");
    }

    #[test]
    fn test_default_options_match_fixed_configuration() {
        let opts = ExportOptions::default();
        assert_eq!(opts.format, PageFormat::A4);
        assert_eq!(opts.orientation, Orientation::Portrait);
        assert_eq!(opts.margins_in, [0.5, 0.5, 0.5, 0.5]);
        assert_eq!(opts.raster_scale, 2.0);
        assert!(opts.allow_cross_origin_images);
    }
}
