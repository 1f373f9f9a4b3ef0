use crate::theme::{Theme, ThemeColor};

use super::ThemeBackend;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Color Palette</title>
    <link rel="stylesheet" href="palette.css">
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: 'SF Mono', 'Monaco', 'Fira Code', 'Courier New', monospace; background: #0a0a0a; color: #fff; }
        .header { padding: 0.5rem 1rem; border-bottom: 1px solid #1a1a1a; }
        .header h1 { font-size: 1rem; font-weight: normal; letter-spacing: 2px; color: #888; }
        .color-block { padding: 2rem 1rem; }
        .color-name { font-size: 0.8rem; font-weight: bold; text-transform: uppercase; letter-spacing: 1px; }
        .color-hex { font-size: 0.7rem; margin-bottom: 1rem; }
        .shades { display: grid; grid-template-columns: repeat(10, 1fr); }
        .shade-block { min-height: 80px; display: flex; flex-direction: column; justify-content: center; align-items: center; }
        .shade-label { font-size: 0.6rem; font-weight: bold; }
        .shade-hex { font-size: 0.55rem; }
    </style>
</head>
<body>
    <div class="header">
        <h1>COLOR PALETTE</h1>
    </div>
"#;

const FOOT: &str = "</body>\n</html>\n";

/// Static HTML page previewing every color and its ramp.
pub struct HtmlBackend;

impl ThemeBackend for HtmlBackend {
    fn name(&self) -> &str {
        "HTML preview"
    }

    fn file_name(&self) -> &str {
        "index.html"
    }

    fn serialize(&self, theme: &Theme) -> String {
        let mut out = String::from(HEAD);
        for entry in &theme.colors {
            push_color_block(&mut out, entry);
        }
        out.push_str(FOOT);
        out
    }
}

fn push_color_block(out: &mut String, entry: &ThemeColor) {
    let text = entry.color.text_color();
    out.push_str(&format!(
        "    <div class=\"color-block\" style=\"background-color: {};\">\n",
        entry.color
    ));
    out.push_str(&format!(
        "        <div class=\"color-name\" style=\"color: {text};\">{}</div>\n",
        escape_html(&entry.name)
    ));
    out.push_str(&format!(
        "        <div class=\"color-hex\" style=\"color: {text};\">#{}</div>\n",
        entry.color.to_hex().to_uppercase()
    ));
    out.push_str("        <div class=\"shades\">\n");
    for shade in entry.ramp.iter() {
        let text = shade.color.text_color();
        out.push_str(&format!(
            "            <div class=\"shade-block\" style=\"background-color: {}; color: {text};\" title=\"var(--color-{}-{})\">\n",
            shade.color,
            escape_html(&entry.slug),
            shade.step
        ));
        out.push_str(&format!(
            "                <div class=\"shade-label\">{}</div>\n",
            shade.step
        ));
        out.push_str(&format!(
            "                <div class=\"shade-hex\">#{}</div>\n",
            shade.color.to_hex().to_uppercase()
        ));
        out.push_str("            </div>\n");
    }
    out.push_str("        </div>\n");
    out.push_str("    </div>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
