//! Terminal rendering of content blocks.
//!
//! Prose goes through the same line classifier and inline parser as the HTML
//! renderer, so headings, list items, bold, italic and links look the same
//! in both previewers.

use probandha_engine::markdown::inline::{InlineNode, parse_inline};
use probandha_engine::markdown::line::MarkdownLine;
use probandha_engine::{CalloutType, ContentBlock, GalleryCursor, Locale};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Gallery state for one rendered gallery block.
#[derive(Debug, Clone, Copy)]
pub struct GalleryView {
    pub cursor: GalleryCursor,
    pub focused: bool,
}

pub fn block_lines(
    block: &ContentBlock,
    gallery: Option<GalleryView>,
    locale: Locale,
) -> Vec<Line<'static>> {
    match block {
        ContentBlock::Text { content } => text_lines(content),
        ContentBlock::Code {
            content,
            language,
            title,
        } => code_lines(content, language, title, locale),
        ContentBlock::Gallery { title, images } => {
            let view = gallery.unwrap_or(GalleryView {
                cursor: GalleryCursor::new(images.len()),
                focused: false,
            });
            gallery_lines(title, images, view, locale)
        }
        ContentBlock::Image { src, alt } => image_lines(src, alt),
        ContentBlock::Callout {
            callout_type,
            content,
        } => callout_lines(*callout_type, content),
    }
}

pub fn text_lines(content: &str) -> Vec<Line<'static>> {
    content
        .lines()
        .map(|line| match MarkdownLine::classify(line) {
            MarkdownLine::Blank => Line::default(),
            MarkdownLine::Heading { level, text } => {
                let style = Style::default()
                    .fg(heading_color(level))
                    .add_modifier(Modifier::BOLD);
                let mut spans = vec![Span::styled(format!("{} ", "#".repeat(level as usize)), style)];
                spans.extend(inline_spans(&parse_inline(text), style));
                Line::from(spans)
            }
            MarkdownLine::ListItem { text } => {
                let mut spans = vec![Span::raw("  • ")];
                spans.extend(inline_spans(&parse_inline(text), Style::default()));
                Line::from(spans)
            }
            MarkdownLine::Bare(text) => {
                Line::from(inline_spans(&parse_inline(text), Style::default()))
            }
        })
        .collect()
}

fn heading_color(level: u8) -> Color {
    match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Blue,
    }
}

fn inline_spans(nodes: &[InlineNode], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for node in nodes {
        match node {
            InlineNode::Text(text) => spans.push(Span::styled(text.clone(), base)),
            InlineNode::Strong(children) => {
                spans.extend(inline_spans(children, base.add_modifier(Modifier::BOLD)));
            }
            InlineNode::Emphasis(children) => {
                spans.extend(inline_spans(children, base.add_modifier(Modifier::ITALIC)));
            }
            InlineNode::Link { label, url } => {
                let link = base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
                spans.extend(inline_spans(label, link));
                spans.push(Span::styled(
                    format!(" ({url})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
    spans
}

fn code_lines(content: &str, language: &str, title: &str, locale: Locale) -> Vec<Line<'static>> {
    let frame = Style::default().fg(Color::DarkGray);
    let header = if title.is_empty() {
        format!("┌─ {language} ─ [{}]", locale.labels().copy)
    } else {
        format!("┌─ {title} · {language} ─ [{}]", locale.labels().copy)
    };

    let mut lines = vec![Line::from(Span::styled(header, frame))];
    lines.extend(content.lines().map(|line| {
        Line::from(vec![
            Span::styled("│ ", frame),
            Span::styled(line.to_string(), Style::default().fg(Color::Green)),
        ])
    }));
    lines.push(Line::from(Span::styled("└─", frame)));
    lines
}

fn gallery_lines(
    title: &str,
    images: &[String],
    view: GalleryView,
    locale: Locale,
) -> Vec<Line<'static>> {
    if images.is_empty() {
        return vec![];
    }
    let labels = locale.labels();
    let marker = if view.focused { "▶ " } else { "  " };
    let title_style = if view.focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let src = images
        .get(view.cursor.index())
        .cloned()
        .unwrap_or_default();
    let dots: String = (0..images.len())
        .map(|i| if i == view.cursor.index() { '●' } else { '○' })
        .collect();

    vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("🖼 {title}"), title_style),
            Span::raw(format!("  {}", view.cursor.position_label())),
        ]),
        Line::from(vec![
            Span::styled(format!("  ‹ {} ", labels.previous), Style::default().fg(Color::DarkGray)),
            Span::raw(src),
            Span::styled(format!(" {} ›", labels.next), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(format!("  {dots}")),
    ]
}

fn image_lines(src: &str, alt: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw("🖼 "),
        Span::styled(src.to_string(), Style::default().fg(Color::Blue)),
    ])];
    if !alt.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("   {alt}"),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn callout_color(callout_type: CalloutType) -> Color {
    match callout_type {
        CalloutType::Info => Color::Blue,
        CalloutType::Warning => Color::Yellow,
        CalloutType::Error => Color::Red,
        CalloutType::Success => Color::Green,
        CalloutType::Default => Color::Gray,
    }
}

fn callout_lines(callout_type: CalloutType, content: &str) -> Vec<Line<'static>> {
    let style = callout_type.style();
    let color = Style::default().fg(callout_color(callout_type));
    let mut spans = vec![
        Span::styled("▌", color),
        Span::raw(format!("{} ", style.icon)),
    ];
    spans.extend(inline_spans(&parse_inline(content), color));
    vec![Line::from(spans)]
}
