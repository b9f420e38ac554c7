//! PDF export service
//!
//! Landscape Letter pages with a title line, a grid table and the header row
//! repeated on every page.
//!
//! Text is set in a system TrueType font so Cyrillic names survive. The font
//! comes from the report metadata, then `HRDESK_PDF_FONT`, then a per-platform
//! list of well-known files. Without one the built-in Helvetica is used, which
//! only covers WinAnsi and drops everything else.

use printpdf::{
    BuiltinFont, Color, Greyscale, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point,
};
use std::path::{Path, PathBuf};

use super::report::{ReportMetadata, ReportRow, REPORT_HEADERS};
use crate::config::{expand_path, PDF_FONT_ENV};
use crate::error::{Error, Result};

const PAGE_WIDTH: f32 = 279.4;
const PAGE_HEIGHT: f32 = 215.9;
const MARGIN: f32 = 15.0;

const COLUMN_WIDTHS: [f32; 5] = [20.0, 60.0, 50.0, 40.0, 30.0];
const ROW_HEIGHT: f32 = 7.0;
const CELL_PADDING: f32 = 1.5;
const TEXT_BASELINE: f32 = 2.3;

const FONT_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;
const TITLE_BLOCK: f32 = 12.0;

fn pdf_error(e: printpdf::Error) -> Error {
    Error::report(format!("PDF rendering failed: {:?}", e))
}

#[cfg(windows)]
fn font_candidates() -> Vec<PathBuf> {
    let windir = std::env::var_os("WINDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("C:/Windows"));
    ["arial.ttf", "ARIAL.TTF"]
        .iter()
        .map(|name| windir.join("Fonts").join(name))
        .collect()
}

#[cfg(target_os = "macos")]
fn font_candidates() -> Vec<PathBuf> {
    ["/Library/Fonts/Arial.ttf", "/Library/Fonts/DejaVuSans.ttf"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

#[cfg(not(any(windows, target_os = "macos")))]
fn font_candidates() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
        "/usr/share/fonts/truetype/msttcorefonts/arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// First existing font: the configured one, then the candidates in order
fn resolve_font(configured: Option<PathBuf>, candidates: Vec<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path);
        }
        log::warn!("Configured PDF font {} does not exist", path.display());
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Locate a TrueType font with Cyrillic coverage on this machine
pub fn find_unicode_font() -> Option<PathBuf> {
    let configured = std::env::var(PDF_FONT_ENV).ok().map(|p| expand_path(&p));
    resolve_font(configured, font_candidates())
}

/// WinAnsi is Latin-1 plus a handful of typographic characters
fn is_win_ansi(c: char) -> bool {
    matches!(
        c as u32,
        0x00..=0xFF
            | 0x152
            | 0x153
            | 0x160
            | 0x161
            | 0x178
            | 0x17D
            | 0x17E
            | 0x192
            | 0x2C6
            | 0x2DC
            | 0x2013
            | 0x2014
            | 0x2018..=0x201A
            | 0x201C..=0x201E
            | 0x2020..=0x2022
            | 0x2026
            | 0x2030
            | 0x2039
            | 0x203A
            | 0x20AC
            | 0x2122
    )
}

/// True when the built-in fonts would silently drop part of `text`
pub(crate) fn needs_unicode_font(text: &str) -> bool {
    !text.chars().all(is_win_ansi)
}

/// Number of data rows that fit below the header on a page
fn rows_per_page(table_top: f32) -> usize {
    let usable = table_top - MARGIN - ROW_HEIGHT;
    (usable / ROW_HEIGHT).floor().max(1.0) as usize
}

/// Split rows into pages; the first page is shorter because of the title
pub(crate) fn paginate(row_count: usize) -> Vec<std::ops::Range<usize>> {
    let first = rows_per_page(PAGE_HEIGHT - MARGIN - TITLE_BLOCK);
    let rest = rows_per_page(PAGE_HEIGHT - MARGIN);

    let mut pages = vec![0..row_count.min(first)];
    let mut start = first;
    while start < row_count {
        let end = (start + rest).min(row_count);
        pages.push(start..end);
        start = end;
    }
    pages
}

pub struct EmployeePdfReport {
    heading: String,
    font: Option<PathBuf>,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    unicode: bool,
}

/// A rendered document ready to be written out
pub struct RenderedPdf {
    document: PdfDocumentReference,
}

impl EmployeePdfReport {
    pub fn new(metadata: &ReportMetadata) -> Self {
        Self {
            heading: metadata.heading(),
            font: metadata.pdf_font.clone().or_else(find_unicode_font),
        }
    }

    /// Replace the font file; `None` forces the built-in Helvetica
    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        self.font = font;
        self
    }

    fn load_fonts(&self, document: &PdfDocumentReference) -> Result<Fonts> {
        match &self.font {
            Some(path) => match load_external_font(document, path) {
                Ok(font) => {
                    log::info!("Using PDF font {}", path.display());
                    return Ok(Fonts {
                        regular: font.clone(),
                        bold: font,
                        unicode: true,
                    });
                }
                Err(e) => log::warn!(
                    "Could not load PDF font {}: {}; falling back to Helvetica",
                    path.display(),
                    e
                ),
            },
            None => log::warn!(
                "No TrueType font found, using Helvetica; set {} to a .ttf file for Cyrillic text",
                PDF_FONT_ENV
            ),
        }

        Ok(Fonts {
            regular: document
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(pdf_error)?,
            bold: document
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(pdf_error)?,
            unicode: false,
        })
    }

    pub fn render(&self, rows: &[ReportRow]) -> Result<RenderedPdf> {
        let (document, first_page, first_layer) = PdfDocument::new(
            self.heading.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let Fonts { regular, bold, unicode } = self.load_fonts(&document)?;
        if !unicode {
            let lossy = needs_unicode_font(&self.heading)
                || rows.iter().any(|r| r.cells().iter().any(|c| needs_unicode_font(c)));
            if lossy {
                log::warn!(
                    "PDF report has characters Helvetica cannot encode; they will be missing"
                );
            }
        }

        for (page_no, range) in paginate(rows.len()).into_iter().enumerate() {
            let layer = if page_no == 0 {
                document.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) =
                    document.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                document.get_page(page).get_layer(layer)
            };

            let mut top = PAGE_HEIGHT - MARGIN;
            if page_no == 0 {
                layer.use_text(
                    self.heading.as_str(),
                    TITLE_SIZE,
                    Mm(MARGIN),
                    Mm(top - TITLE_SIZE * 0.3528),
                    &bold,
                );
                top -= TITLE_BLOCK;
            }

            let headers = REPORT_HEADERS.map(String::from);
            draw_row(&layer, top, &headers, &bold);

            let page_rows = &rows[range];
            for (idx, row) in page_rows.iter().enumerate() {
                let row_top = top - ROW_HEIGHT * (idx as f32 + 1.0);
                draw_row(&layer, row_top, &row.cells(), &regular);
            }

            draw_grid(&layer, top, page_rows.len() + 1);
        }

        Ok(RenderedPdf { document })
    }
}

fn load_external_font(document: &PdfDocumentReference, path: &Path) -> Result<IndirectFontRef> {
    let file = std::fs::File::open(path)?;
    document.add_external_font(file).map_err(pdf_error)
}

fn draw_row(layer: &PdfLayerReference, row_top: f32, cells: &[String; 5], font: &IndirectFontRef) {
    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        layer.use_text(
            cell.as_str(),
            FONT_SIZE,
            Mm(x + CELL_PADDING),
            Mm(row_top - ROW_HEIGHT + TEXT_BASELINE),
            font,
        );
        x += width;
    }
}

fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    }
}

fn draw_grid(layer: &PdfLayerReference, top: f32, row_count: usize) {
    layer.set_outline_color(Color::Greyscale(Greyscale::new(0.5, None)));
    layer.set_outline_thickness(0.5);

    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    let bottom = top - ROW_HEIGHT * row_count as f32;

    for i in 0..=row_count {
        let y = top - ROW_HEIGHT * i as f32;
        layer.add_line(segment(MARGIN, y, MARGIN + table_width, y));
    }

    let mut x = MARGIN;
    layer.add_line(segment(x, top, x, bottom));
    for width in COLUMN_WIDTHS {
        x += width;
        layer.add_line(segment(x, top, x, bottom));
    }
}

impl RenderedPdf {
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        self.document.save_to_bytes().map_err(pdf_error)
    }

    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
