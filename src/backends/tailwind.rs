use crate::theme::Theme;

use super::ThemeBackend;

/// `tailwind.config.js` extending the default color set with every ramp.
pub struct TailwindBackend;

impl ThemeBackend for TailwindBackend {
    fn name(&self) -> &str {
        "Tailwind config"
    }

    fn file_name(&self) -> &str {
        "tailwind.config.js"
    }

    fn serialize(&self, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str("/** @type {import('tailwindcss').Config} */\n");
        out.push_str("module.exports = {\n");
        out.push_str("  content: [],\n");
        out.push_str("  theme: {\n");
        out.push_str("    extend: {\n");
        out.push_str("      colors: {\n");

        for entry in &theme.colors {
            out.push_str(&format!("        '{}': {{\n", escape_js(&entry.slug)));
            for shade in entry.ramp.iter() {
                out.push_str(&format!("          '{}': '{}',\n", shade.step, shade.color));
            }
            out.push_str("        },\n");
        }

        out.push_str("      },\n");
        out.push_str("    },\n");
        out.push_str("  },\n");
        out.push_str("  plugins: [],\n");
        out.push_str("}\n");

        out
    }
}

/// Escape text for a single-quoted JS string literal.
fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_support::test_theme;
    use crate::color::Color;
    use crate::pipeline::parse::NamedColor;

    #[test]
    fn contains_every_step_per_slug() {
        let theme = test_theme();
        let output = TailwindBackend.serialize(&theme);
        for entry in &theme.colors {
            assert!(output.contains(&format!("        '{}': {{\n", entry.slug)));
            for shade in entry.ramp.iter() {
                assert!(output.contains(&format!("          '{}': '{}',\n", shade.step, shade.color)));
            }
        }
        assert!(output.contains("          '500': '#e70000',\n"));
    }

    #[test]
    fn braces_are_balanced() {
        let output = TailwindBackend.serialize(&test_theme());
        let open = output.matches('{').count();
        let close = output.matches('}').count();
        assert_eq!(open, close);
        assert!(output.starts_with("/** @type {import('tailwindcss').Config} */\nmodule.exports = {"));
        assert!(output.ends_with("  plugins: [],\n}\n"));
    }

    #[test]
    fn quotes_in_slug_are_escaped() {
        let theme = Theme::from_colors(&[NamedColor::new("Baker's Blue", Color::new(0, 0, 200))]);
        let output = TailwindBackend.serialize(&theme);
        assert!(output.contains("        'baker\\'s-blue': {\n"));
    }

    #[test]
    fn backslash_is_escaped_before_quote() {
        assert_eq!(escape_js(r"a\'b"), r"a\\\'b");
        assert_eq!(escape_js("plain"), "plain");
    }
}
