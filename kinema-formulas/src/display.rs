//! Viewable formulas
//!
//! Symbolic formulas the viewer can put on screen, each with the figure
//! settings it is drawn with.

use kinema_core::KinemaError;

/// Horizontal anchoring of the text relative to its x position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Figure configuration handed to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Figure width in inches
    pub width: f32,
    /// Figure height in inches
    pub height: f32,
    /// Font size in points
    pub font_size: u32,
    pub align: HAlign,
    pub show_axis: bool,
}

impl FigureStyle {
    pub const fn new(width: f32, height: f32, font_size: u32) -> Self {
        Self { width, height, font_size, align: HAlign::Center, show_axis: false }
    }

    pub fn with_align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_axis(mut self, show_axis: bool) -> Self {
        self.show_axis = show_axis;
        self
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self::new(6.0, 2.0, 20)
    }
}

/// A formula shown symbolically, never evaluated
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFormula {
    pub name: String,
    /// Menu label, usually "Title: plain-text form"
    pub label: String,
    /// LaTeX-style source, `$`-delimited
    pub latex: String,
    pub style: FigureStyle,
}

impl DisplayFormula {
    pub fn new(name: &str, label: &str, latex: &str, style: FigureStyle) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            latex: latex.to_string(),
            style,
        }
    }
}

/// Ordered, extendable list of viewable formulas
#[derive(Debug, Clone, Default)]
pub struct DisplayCatalog {
    formulas: Vec<DisplayFormula>,
}

impl DisplayCatalog {
    pub fn new() -> Self {
        Self { formulas: Vec::new() }
    }

    pub fn with_formula(mut self, formula: DisplayFormula) -> Self {
        match self.formulas.iter().position(|f| f.name == formula.name) {
            Some(i) => self.formulas[i] = formula,
            None => self.formulas.push(formula),
        }
        self
    }

    pub fn get(&self, name: &str) -> Result<&DisplayFormula, KinemaError> {
        self.formulas.iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| KinemaError::unknown_formula(name)
                .with_suggestion(format!("Available: {}", self.names().join(", "))))
    }

    pub fn names(&self) -> Vec<&str> {
        self.formulas.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayFormula> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}

pub fn momentum() -> DisplayFormula {
    DisplayFormula::new(
        "momentum",
        "Momentum: \\vec{p} = m \\vec{v}",
        "$\\vec{p} = m \\vec{v}$",
        FigureStyle::new(6.0, 2.0, 24),
    )
}

pub fn conservation_of_momentum() -> DisplayFormula {
    DisplayFormula::new(
        "conservation_of_momentum",
        "Conservation of Momentum: \\vec{p}_{1,i} + \\vec{p}_{2,i} = \\vec{p}_{1,f} + \\vec{p}_{2,f}",
        "$\\vec{p}_{1,\\text{initial}} + \\vec{p}_{2,\\text{initial}} \
         = \\vec{p}_{1,\\text{final}} + \\vec{p}_{2,\\text{final}}$",
        FigureStyle::new(6.0, 2.0, 20),
    )
}

/// Catalog with the built-in viewable formulas
pub fn standard_display_catalog() -> DisplayCatalog {
    DisplayCatalog::new()
        .with_formula(momentum())
        .with_formula(conservation_of_momentum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = standard_display_catalog();
        assert_eq!(catalog.names(), vec!["momentum", "conservation_of_momentum"]);
    }

    #[test]
    fn test_catalog_is_extendable() {
        let catalog = standard_display_catalog().with_formula(DisplayFormula::new(
            "newton_second_law",
            "Newton's Second Law: F = m a",
            "$\\vec{F} = m \\vec{a}$",
            FigureStyle::default(),
        ));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("newton_second_law").unwrap().style.font_size, 20);
    }

    #[test]
    fn test_latex_continuation_has_single_space() {
        let formula = conservation_of_momentum();
        assert!(formula.latex.contains("{initial}} = \\vec"), "{}", formula.latex);
    }

    #[test]
    fn test_momentum_style() {
        let formula = momentum();
        assert_eq!(formula.style, FigureStyle {
            width: 6.0,
            height: 2.0,
            font_size: 24,
            align: HAlign::Center,
            show_axis: false,
        });
    }

    #[test]
    fn test_unknown_display_formula() {
        let err = standard_display_catalog().get("bernoulli").unwrap_err();
        assert_eq!(err.code, kinema_core::codes::UNKNOWN_FORMULA);
        assert_eq!(err.suggestion.as_deref(), Some("Available: momentum, conservation_of_momentum"));
    }
}
