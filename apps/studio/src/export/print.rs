//! Print fallback document: the preview region plus a fixed print
//! stylesheet that restates the screen styling in print-safe units, and a
//! script that opens the print dialog once the page has loaded.

use crate::render::html::escape;

const PRINT_STYLESHEET: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.4;
  color: #000;
  background: white;
  font-size: 12pt;
}
.resume-content { max-width: 800px; margin: 0 auto; padding: 0.5in; }
h1 { font-size: 20pt; font-weight: bold; margin-bottom: 8pt; }
h2 { font-size: 14pt; font-weight: bold; margin: 12pt 0 6pt 0; }
h3 { font-size: 12pt; font-weight: bold; margin: 6pt 0 3pt 0; }
p, li { font-size: 11pt; margin-bottom: 3pt; line-height: 1.3; }
ul { margin-left: 18pt; }
.text-blue-600 { color: #2563eb !important; }
.text-slate-800 { color: #1e293b !important; }
.bg-slate-800 { background-color: #1e293b !important; color: white !important; }
.border-b-2 { border-bottom: 2px solid #2563eb !important; padding-bottom: 2pt; }
.border-b { border-bottom: 1px solid #64748b !important; }
.space-y-1 > * + * { margin-top: 3pt; }
.mb-6 { margin-bottom: 12pt; }
.mb-4 { margin-bottom: 8pt; }
.mb-3 { margin-bottom: 6pt; }
.mb-2 { margin-bottom: 4pt; }
.ml-4 { margin-left: 12pt; }
.p-8 { padding: 16pt; }
.flex { display: flex; }
.justify-between { justify-content: space-between; }
.items-start { align-items: flex-start; }
.items-center { align-items: center; }
.w-1\/3 { width: 33.333%; }
.w-2\/3 { width: 66.667%; }
.break-all { word-break: break-all; }
.leading-tight { line-height: 1.2; }
.leading-relaxed { line-height: 1.4; }
.text-justify { text-align: justify; }
.uppercase { text-transform: uppercase; }
.tracking-wide { letter-spacing: 0.05em; }
.skill-items { list-style: none; margin-left: 0; }
.skill-items li { display: inline; margin-right: 6pt; }
.sep { margin: 0 4pt; }
@page { margin: 0.5in; size: A4; }
@media print {
  body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
  .bg-slate-800 { background-color: #1e293b !important; }
}
"#;

const PRINT_SCRIPT: &str =
    "window.addEventListener('load', function () { window.print(); window.close(); });";

/// Builds the standalone print page around the preview region's markup.
pub fn build_print_document(title_name: Option<&str>, region_html: &str) -> String {
    let title = format!("Resume - {}", title_name.unwrap_or("Resume"));
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"resume-content\">\n{}\n</div>\n<script>{}</script>\n</body>\n</html>\n",
        escape(&title),
        PRINT_STYLESHEET,
        region_html,
        PRINT_SCRIPT
    )
}
