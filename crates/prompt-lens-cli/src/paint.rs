use prompt_lens_engine::{BorderCategory, RenderNode};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn border_color(border: BorderCategory) -> Color {
    match border {
        BorderCategory::Tool => Color::Green,
        BorderCategory::Instruction => Color::Blue,
        BorderCategory::Example => Color::Yellow,
        BorderCategory::User => Color::Cyan,
        BorderCategory::Assistant => Color::Magenta,
        BorderCategory::Default => Color::Gray,
    }
}

/// Paints a render plan as terminal lines, one blank line between top-level nodes.
pub fn paint_nodes(nodes: &[RenderNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        paint_node(node, "", &mut lines);
    }
    lines
}

fn paint_node(node: &RenderNode, indent: &str, lines: &mut Vec<Line<'static>>) {
    match node {
        RenderNode::Code { language, content } => {
            let label = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
            lines.push(Line::from(Span::styled(format!("{indent}[{language}]"), label)));
            for text in content.lines() {
                lines.push(Line::from(format!("{indent}{text}")));
            }
        }
        RenderNode::Bordered {
            tag_name,
            border,
            language,
            content,
        } => {
            let frame = Style::default().fg(border_color(*border));
            framed(indent, tag_name, &language.to_string(), content, frame, lines);
        }
        RenderNode::Functions { tag_name, children } => {
            let marker = Style::default()
                .fg(border_color(BorderCategory::Tool))
                .add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled(format!("{indent}<{tag_name}>"), marker)));
            let child_indent = format!("{indent}  ");
            for child in children {
                paint_node(child, &child_indent, lines);
            }
            lines.push(Line::from(Span::styled(format!("{indent}</{tag_name}>"), marker)));
        }
        RenderNode::Function { language, content } => {
            let frame = Style::default().fg(border_color(BorderCategory::Tool));
            framed(indent, "function", &language.to_string(), content, frame, lines);
        }
    }
}

fn framed(
    indent: &str,
    title: &str,
    language: &str,
    content: &str,
    frame: Style,
    lines: &mut Vec<Line<'static>>,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{indent}┌─ "), frame),
        Span::styled(title.to_string(), frame.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" ─ {language}"), frame),
    ]));
    for text in content.lines() {
        lines.push(Line::from(vec![
            Span::styled(format!("{indent}│ "), frame),
            Span::raw(text.to_string()),
        ]));
    }
    lines.push(Line::from(Span::styled(format!("{indent}└─"), frame)));
}

/// Flattens a styled line to its text.
pub fn line_to_string(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
