//! Formula viewer
//!
//! Shows a formula's symbolic form through a `FormulaRenderer` and waits
//! for the user to dismiss it.

use crate::console::Console;
use crate::latex;
use crate::menu::Menu;
use kinema_core::KinemaError;
use kinema_formulas::{DisplayCatalog, DisplayFormula, FigureStyle, HAlign};

/// Terminal columns per figure inch
pub const COLS_PER_INCH: f32 = 10.0;
/// Terminal rows per figure inch
pub const ROWS_PER_INCH: f32 = 3.0;

/// Puts a formula on screen. Returns once the user has dismissed it.
pub trait FormulaRenderer {
    fn render(&self, console: &mut Console<'_>, formula: &DisplayFormula) -> Result<(), KinemaError>;
}

/// Draws formulas as Unicode text on a character canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Canvas lines for a formula, sized from its figure style
    pub fn canvas(&self, formula: &DisplayFormula) -> Result<Vec<String>, KinemaError> {
        let text = latex::to_unicode(&formula.latex)?;
        Ok(layout(&text, &formula.style))
    }
}

impl FormulaRenderer for TerminalRenderer {
    fn render(&self, console: &mut Console<'_>, formula: &DisplayFormula) -> Result<(), KinemaError> {
        let lines = self.canvas(formula)?;
        tracing::debug!(formula = %formula.name, rows = lines.len(), "rendering formula");
        console.say("")?;
        for line in lines {
            console.say(line)?;
        }
        console.say("(press Enter to close)")?;
        // Closed input dismisses the figure too.
        console.prompt("")?;
        Ok(())
    }
}

/// Gap between glyphs for a font size: one space per 12pt above 12pt
pub fn letter_spacing(font_size: u32) -> usize {
    (font_size.saturating_sub(12) / 12) as usize
}

/// Lay text out on a `width x height` inch canvas, on the middle row,
/// anchored at the horizontal centre according to the alignment.
pub fn layout(text: &str, style: &FigureStyle) -> Vec<String> {
    let cols = ((style.width * COLS_PER_INCH).round() as usize).max(1);
    let rows = ((style.height * ROWS_PER_INCH).round() as usize).max(1);
    let (inner_cols, inner_rows) = if style.show_axis {
        (cols.saturating_sub(2), rows.saturating_sub(2).max(1))
    } else {
        (cols, rows)
    };

    let gap = " ".repeat(letter_spacing(style.font_size));
    let spaced = latex::glyphs(text).join(&gap);
    let width = latex::display_width(&spaced);

    let anchor = inner_cols / 2;
    let start = match style.align {
        HAlign::Left => anchor,
        HAlign::Center => anchor.saturating_sub(width / 2),
        HAlign::Right => anchor.saturating_sub(width),
    };
    let mut text_row = format!("{}{}", " ".repeat(start), spaced);
    let used = start + width;
    if used < inner_cols {
        text_row.push_str(&" ".repeat(inner_cols - used));
    }

    let middle = inner_rows / 2;
    let body = (0..inner_rows).map(|row| {
        if row == middle {
            text_row.clone()
        } else {
            " ".repeat(inner_cols)
        }
    });

    if style.show_axis {
        let edge = format!("+{}+", "-".repeat(inner_cols.max(width + start)));
        let pad = edge.chars().count() - 2;
        let mut lines = vec![edge.clone()];
        lines.extend(body.map(|line| {
            let fill = pad.saturating_sub(latex::display_width(&line));
            format!("|{}{}|", line, " ".repeat(fill))
        }));
        lines.push(edge);
        lines
    } else {
        body.map(|line| line.trim_end().to_string()).collect()
    }
}

pub struct FormulaViewer<'a> {
    catalog: &'a DisplayCatalog,
    renderer: &'a dyn FormulaRenderer,
}

impl<'a> FormulaViewer<'a> {
    pub fn new(catalog: &'a DisplayCatalog, renderer: &'a dyn FormulaRenderer) -> Self {
        Self { catalog, renderer }
    }

    /// Registered formula names in menu order
    pub fn available_formulas(&self) -> Vec<&'a str> {
        self.catalog.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn render(&self, console: &mut Console<'_>, name: &str) -> Result<(), KinemaError> {
        let formula = self.catalog.get(name)?;
        self.renderer.render(console, formula)
    }

    /// Formula selection menu, labelled with each formula's plain form
    pub fn menu(&self) -> Menu<'_> {
        self.catalog.iter().fold(Menu::new("View Physics Formulas:"), move |menu, formula| {
            let name = formula.name.as_str();
            menu.entry(formula.label.clone(), move |console: &mut Console<'_>| self.render(console, name))
        })
    }
}
