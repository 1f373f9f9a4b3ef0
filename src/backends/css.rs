use crate::theme::Theme;

use super::ThemeBackend;

/// CSS custom properties plus `.bg-*`, `.text-*` and `.border-*` utilities.
pub struct CssBackend;

impl ThemeBackend for CssBackend {
    fn name(&self) -> &str {
        "CSS"
    }

    fn file_name(&self) -> &str {
        "palette.css"
    }

    fn serialize(&self, theme: &Theme) -> String {
        let mut out = String::new();
        out.push_str(":root {\n");
        out.push_str("  /* Primary Colors */\n");

        for entry in &theme.colors {
            let slug = &entry.slug;
            let c = entry.color;
            out.push_str(&format!("  --color-{slug}: {c};\n"));
            out.push_str(&format!("  --color-{slug}-rgb: {}, {}, {};\n", c.r, c.g, c.b));
            out.push_str(&format!("  --color-{slug}-hsl: {};\n", entry.hsl));

            out.push_str(&format!(
                "\n  /* {} Shades */\n",
                entry.name.replace("*/", "* /")
            ));
            for shade in entry.ramp.iter() {
                out.push_str(&format!(
                    "  --color-{slug}-{}: {};\n",
                    shade.step, shade.color
                ));
            }
        }

        out.push_str("}\n\n");

        out.push_str("/* Utility Classes */\n");
        for entry in &theme.colors {
            let slug = &entry.slug;
            out.push_str(&format!(
                ".bg-{slug} {{ background-color: var(--color-{slug}); }}\n"
            ));
            out.push_str(&format!(".text-{slug} {{ color: var(--color-{slug}); }}\n"));
            out.push_str(&format!(
                ".border-{slug} {{ border-color: var(--color-{slug}); }}\n"
            ));
        }

        out
    }
}
