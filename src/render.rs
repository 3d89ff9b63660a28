//! Document rendering: the HTML page with its nested list and script, and the
//! plain ASCII tree.

use crate::tree::TreeEntry;
use std::io::{self, Write};

/// Configuration for the HTML document.
pub struct DocumentConfig {
    /// Text for the `<title>` and the page heading.
    pub title: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "File Tree".to_string(),
        }
    }
}

const STYLE: &str = r#"    <style>
        ul {
            list-style-type: none;
        }
        .caret {
            cursor: pointer;
            user-select: none;
        }
        .caret::before {
            content: "\1F4C1"; /* closed folder */
            color: black;
            display: inline-block;
            margin-right: 6px;
        }
        .caret-down::before {
            content: "\1F4C2"; /* open folder */
        }
        .nested {
            display: none;
        }
        .active {
            display: block;
        }
    </style>
"#;

// generateAsciiTree applies the same connector rules as the `prefix` computed
// in tree::layout, but only descends into expanded (`active`) lists.
const SCRIPT: &str = r#"    <script>
        var toggler = document.getElementsByClassName("caret");
        for (var i = 0; i < toggler.length; i++) {
            toggler[i].addEventListener("click", function() {
                this.parentElement.querySelector(".nested").classList.toggle("active");
                this.classList.toggle("caret-down");
            });
        }

        function generateAsciiTree(element, prefix) {
            prefix = prefix || "";
            var asciiTree = "";
            var children = element.children;
            for (var i = 0; i < children.length; i++) {
                var item = children[i];
                var isLast = i === children.length - 1;
                var connector = isLast ? "└── " : "├── ";
                var caret = item.querySelector(".caret");
                var text = caret ? caret.textContent : item.textContent;
                asciiTree += prefix + connector + text + "\n";
                var nested = item.querySelector(".nested");
                if (nested && nested.classList.contains("active")) {
                    asciiTree += generateAsciiTree(nested, prefix + (isLast ? "    " : "│   "));
                }
            }
            return asciiTree;
        }

        function copyToClipboard() {
            var fileTree = document.getElementById("fileTree");
            var asciiTree = generateAsciiTree(fileTree);
            navigator.clipboard.writeText(asciiTree).then(function() {
                alert("File tree copied to clipboard!");
            }, function(err) {
                console.error("Could not copy text: ", err);
            });
        }
    </script>
"#;

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write the complete HTML document for `entries` to any writer.
pub fn render_document<W: Write>(
    writer: &mut W,
    entries: &[TreeEntry],
    config: &DocumentConfig,
) -> io::Result<()> {
    let title = escape_html(&config.title);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(writer, "    <title>{title}</title>")?;
    writer.write_all(STYLE.as_bytes())?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "    <h1>{title}</h1>")?;
    writeln!(
        writer,
        "    <button onclick=\"copyToClipboard()\">Copy to Clipboard</button>"
    )?;
    writeln!(writer, "    <ul id=\"fileTree\">")?;
    render_list(writer, entries)?;
    writeln!(writer, "    </ul>")?;
    writer.write_all(SCRIPT.as_bytes())?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

/// Write the list items for `entries`, nesting a `<ul class="nested">` under
/// every directory. Entries must be in depth-first pre-order.
pub fn render_list<W: Write>(writer: &mut W, entries: &[TreeEntry]) -> io::Result<()> {
    // Depths of directories whose nested list is still open.
    let mut open_dirs: Vec<usize> = Vec::new();

    for entry in entries {
        close_dirs(writer, &mut open_dirs, entry.depth)?;

        let indent = indent_for(entry.depth);
        let name = escape_html(&entry.name);
        if entry.is_dir {
            writeln!(
                writer,
                "{indent}<li><span class=\"caret closed-folder\">{name}</span>"
            )?;
            writeln!(writer, "{indent}<ul class=\"nested\">")?;
            open_dirs.push(entry.depth);
        } else {
            writeln!(writer, "{indent}<li>{name}</li>")?;
        }
    }

    close_dirs(writer, &mut open_dirs, 0)
}

/// Close every open directory at `depth` or deeper.
fn close_dirs<W: Write>(
    writer: &mut W,
    open_dirs: &mut Vec<usize>,
    depth: usize,
) -> io::Result<()> {
    while let Some(&open) = open_dirs.last() {
        if open < depth {
            break;
        }
        let indent = indent_for(open);
        writeln!(writer, "{indent}</ul>")?;
        writeln!(writer, "{indent}</li>")?;
        open_dirs.pop();
    }
    Ok(())
}

/// Four spaces per level inside the root list, which sits at two levels.
fn indent_for(depth: usize) -> String {
    " ".repeat((depth + 1) * 4)
}

/// Render the full tree as connector-prefixed ASCII lines, the same text the
/// page's copy button produces with every directory expanded.
pub fn render_ascii(entries: &[TreeEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.prefix);
        out.push_str(&entry.name);
        out.push('\n');
    }
    out
}
