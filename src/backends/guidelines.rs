use crate::color::Color;
use crate::theme::{Theme, ThemeColor};

use super::ThemeBackend;

/// Markdown brand guidelines describing every color and its shades.
pub struct GuidelinesBackend;

impl ThemeBackend for GuidelinesBackend {
    fn name(&self) -> &str {
        "brand guidelines"
    }

    fn file_name(&self) -> &str {
        "GUIDELINES.md"
    }

    fn serialize(&self, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str("# Color Palette Brand Guidelines\n\n");
        out.push_str("## Overview\n\n");
        out.push_str(
            "This document outlines the color palette and usage guidelines for the brand.\n\n",
        );
        out.push_str("## Primary Colors\n\n");

        for entry in &theme.colors {
            push_color_section(&mut out, entry);
        }

        push_usage(&mut out);
        push_css_usage(&mut out, theme);
        push_accessibility(&mut out);

        out
    }
}

fn push_color_section(out: &mut String, entry: &ThemeColor) {
    let c = entry.color;
    let hsl = entry.hsl;
    let slug = &entry.slug;

    out.push_str(&format!("### {}\n\n", entry.name));
    out.push_str(&format!("**Hex:** `{c}`  \n"));
    out.push_str(&format!("**RGB:** `rgb({}, {}, {})`  \n", c.r, c.g, c.b));
    out.push_str(&format!(
        "**HSL:** `hsl({:.1}, {:.1}%, {:.1}%)`  \n",
        hsl.hue, hsl.saturation, hsl.lightness
    ));
    out.push_str(&format!("**CSS Variable:** `var(--color-{slug})`  \n"));
    out.push_str(&format!(
        "**Contrast:** {:.2}:1 on white, {:.2}:1 on black\n\n",
        Color::contrast_ratio(&c, &Color::WHITE),
        Color::contrast_ratio(&c, &Color::BLACK)
    ));

    out.push_str("**Shades:**\n\n");
    out.push_str("| Shade | Hex | CSS Variable |\n");
    out.push_str("|---|---|---|\n");
    for shade in entry.ramp.iter() {
        out.push_str(&format!(
            "| {} | `{}` | `var(--color-{slug}-{})` |\n",
            shade.step, shade.color, shade.step
        ));
    }
    out.push_str("\n---\n\n");
}

fn push_usage(out: &mut String) {
    out.push_str("## Usage Guidelines\n\n");
    out.push_str("### Do's\n\n");
    out.push_str("- Use primary colors for brand elements and CTAs\n");
    out.push_str("- Use lighter shades (50-300) for backgrounds\n");
    out.push_str("- Use medium shades (400-600) for primary actions\n");
    out.push_str("- Use darker shades (700-900) for text and emphasis\n");
    out.push_str("- Maintain sufficient contrast ratios for accessibility (WCAG AA minimum)\n\n");
    out.push_str("### Don'ts\n\n");
    out.push_str("- Don't use colors that clash with the brand palette\n");
    out.push_str("- Don't mix too many colors in a single design\n");
    out.push_str("- Don't use dark shades on dark backgrounds\n\n");
}

fn push_css_usage(out: &mut String, theme: &Theme) {
    let example = theme
        .colors
        .first()
        .map(|entry| entry.slug.as_str())
        .unwrap_or("primary");

    out.push_str("## CSS Usage\n\n");
    out.push_str("Import the palette CSS file:\n\n");
    out.push_str("```css\n@import 'palette.css';\n```\n\n");
    out.push_str("Use CSS variables:\n\n");
    out.push_str("```css\n.my-element {\n");
    out.push_str(&format!("  background-color: var(--color-{example});\n"));
    out.push_str(&format!("  color: var(--color-{example}-900);\n"));
    out.push_str("}\n```\n\n");
    out.push_str("Use utility classes:\n\n");
    out.push_str(&format!(
        "```html\n<div class=\"bg-{example} text-white\">Content</div>\n```\n\n"
    ));
}

fn push_accessibility(out: &mut String) {
    out.push_str("## Accessibility\n\n");
    out.push_str("All color combinations should meet WCAG 2.1 Level AA contrast requirements:\n\n");
    out.push_str("- Normal text: 4.5:1 contrast ratio\n");
    out.push_str("- Large text: 3:1 contrast ratio\n");
    out.push_str("- UI components: 3:1 contrast ratio\n");
}
