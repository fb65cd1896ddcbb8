//! HTML document renderer.

use crate::model::card::{Citation, License, ModelCard, ModelMetadata, Owner, Reference, Version};
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; \
margin: 0 auto; max-width: 960px; padding: 1.5rem; color: #202124; }
h1 { border-bottom: 2px solid #dadce0; padding-bottom: 0.5rem; }
h2 { color: #1a73e8; margin-top: 1.75rem; }
section { margin-bottom: 1rem; }
dl { display: grid; grid-template-columns: max-content auto; gap: 0.25rem 1rem; }
dt { font-weight: 600; }
dd { margin: 0; white-space: pre-wrap; }
pre { background: #f1f3f4; padding: 0.75rem; white-space: pre-wrap; }
.empty { color: #5f6368; font-style: italic; }";

const NONE_PROVIDED: &str = "<p class=\"empty\">None provided.</p>\n";

/// Renders the full HTML5 document for a card.
///
/// Sections are emitted in a fixed order: details, owners, version, licenses,
/// references, citations. Empty sections keep their heading.
pub fn render_html(card: &ModelCard) -> String {
    let details = &card.model_details;
    let mut out = String::with_capacity(4096);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&title(details)));
    let _ = writeln!(out, "<style>\n{STYLE}\n</style>");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&title(details)));

    render_details(&mut out, details);
    render_owners(&mut out, &details.owners);
    render_version(&mut out, details.version.as_ref());
    render_licenses(&mut out, &details.licenses);
    render_references(&mut out, &details.references);
    render_citations(&mut out, &details.citations);

    out.push_str("</body>\n</html>\n");
    out
}

fn title(details: &ModelMetadata) -> String {
    if details.name.is_empty() {
        "Model Card".to_string()
    } else {
        format!("Model Card for {}", details.name)
    }
}

fn open_section(out: &mut String, id: &str, heading: &str) {
    let _ = writeln!(out, "<section id=\"{id}\">\n<h2>{heading}</h2>");
}

fn close_section(out: &mut String) {
    out.push_str("</section>\n");
}

fn push_term(out: &mut String, term: &str, value: &str) {
    let _ = writeln!(out, "<dt>{term}</dt><dd>{}</dd>", escape_html(value));
}

fn render_details(out: &mut String, details: &ModelMetadata) {
    open_section(out, "model-details", "Model Details");
    out.push_str("<dl>\n");
    push_term(out, "Name", &details.name);
    push_term(out, "Path", &details.path);
    out.push_str("</dl>\n");
    out.push_str("<h3>Overview</h3>\n");
    push_block(out, &details.overview);
    out.push_str("<h3>Documentation</h3>\n");
    push_block(out, &details.documentation);
    close_section(out);
}

fn push_block(out: &mut String, text: &str) {
    if text.is_empty() {
        out.push_str(NONE_PROVIDED);
    } else {
        let _ = writeln!(out, "<pre>{}</pre>", escape_html(text));
    }
}

fn render_owners(out: &mut String, owners: &[Owner]) {
    open_section(out, "owners", "Owners");
    if owners.is_empty() {
        out.push_str(NONE_PROVIDED);
    }
    for owner in owners {
        out.push_str("<dl class=\"owner\">\n");
        push_term(out, "Name", &owner.name);
        push_term(out, "Contact", &owner.contact);
        out.push_str("</dl>\n");
    }
    close_section(out);
}

fn render_version(out: &mut String, version: Option<&Version>) {
    open_section(out, "version", "Version");
    match version {
        Some(version) => {
            out.push_str("<dl>\n");
            push_term(out, "Name", &version.name);
            push_term(out, "Date", &version.date_label());
            push_term(out, "Diff", &version.diff);
            out.push_str("</dl>\n");
        }
        None => out.push_str(NONE_PROVIDED),
    }
    close_section(out);
}

fn render_licenses(out: &mut String, licenses: &[License]) {
    open_section(out, "licenses", "Licenses");
    if licenses.is_empty() {
        out.push_str(NONE_PROVIDED);
    }
    for license in licenses {
        out.push_str("<dl class=\"license\">\n");
        push_term(out, "Identifier", &license.identifier);
        out.push_str("</dl>\n");
        if !license.custom_text.is_empty() {
            let _ = writeln!(out, "<pre>{}</pre>", escape_html(&license.custom_text));
        }
    }
    close_section(out);
}

fn render_references(out: &mut String, references: &[Reference]) {
    open_section(out, "references", "References");
    if references.is_empty() {
        out.push_str(NONE_PROVIDED);
    } else {
        out.push_str("<ul>\n");
        for reference in references {
            let text = escape_html(&reference.reference);
            if is_link(&reference.reference) {
                let _ = writeln!(out, "<li><a href=\"{text}\">{text}</a></li>");
            } else {
                let _ = writeln!(out, "<li>{text}</li>");
            }
        }
        out.push_str("</ul>\n");
    }
    close_section(out);
}

fn render_citations(out: &mut String, citations: &[Citation]) {
    open_section(out, "citations", "Citations");
    if citations.is_empty() {
        out.push_str(NONE_PROVIDED);
    }
    for citation in citations {
        out.push_str("<figure class=\"citation\">\n");
        if !citation.style.is_empty() {
            let _ = writeln!(
                out,
                "<figcaption>{}</figcaption>",
                escape_html(&citation.style)
            );
        }
        let _ = writeln!(out, "<pre>{}</pre>", escape_html(&citation.citation));
        out.push_str("</figure>\n");
    }
    close_section(out);
}

fn is_link(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

/// Escapes text for HTML element content and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
