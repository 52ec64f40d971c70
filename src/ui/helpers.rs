use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Repeat a short ASCII motif until it fills the requested width. The extra
/// padding in `repeat_count` ensures even narrow patterns stay seamless after
/// terminal resizes.
pub(crate) fn repeat_pattern_row(row: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if row.is_empty() {
        return " ".repeat(width);
    }
    let repeat_count = width / row.len() + 2;
    let mut repeated = row.repeat(repeat_count);
    repeated.truncate(width);
    repeated
}

/// Render a card caption centered inside square brackets.
pub(crate) fn caption_line(caption: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let trimmed = caption.trim();
    if trimmed.is_empty() {
        return " ".repeat(width);
    }
    let mut decorated = format!("[ {} ]", trimmed);
    if decorated.len() > width {
        decorated.truncate(width);
    }
    let padding = width.saturating_sub(decorated.len());
    let left = padding / 2;
    let right = padding - left;
    let mut line = String::with_capacity(width);
    line.push_str(&" ".repeat(left));
    line.push_str(&decorated);
    line.push_str(&" ".repeat(right));
    if line.len() < width {
        line.push_str(&" ".repeat(width - line.len()));
    } else if line.len() > width {
        line.truncate(width);
    }
    line
}

/// Build the textual payload for a poster card, mixing the repeating motif
/// with an optional bold highlight when the card is selected.
pub(crate) fn build_poster_lines(
    caption: &str,
    pattern: &[&str],
    inner_width: u16,
    inner_height: u16,
    selected: bool,
) -> Vec<Line<'static>> {
    let width = inner_width as usize;
    let height = inner_height as usize;
    if width == 0 || height == 0 {
        return vec![Line::from("")];
    }

    let mut lines = Vec::with_capacity(height);
    let pattern_rows = pattern.len();
    let label_lines = if height >= 2 { 2 } else { 1 };
    let pattern_height = height.saturating_sub(label_lines);
    let pattern_style = if selected {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if pattern_rows == 0 {
        for _ in 0..pattern_height {
            lines.push(Line::from(vec![Span::styled(
                " ".repeat(width),
                pattern_style,
            )]));
        }
    } else {
        for row_idx in 0..pattern_height {
            let base = pattern[row_idx % pattern_rows];
            let row = repeat_pattern_row(base, width);
            lines.push(Line::from(vec![Span::styled(row, pattern_style)]));
        }
    }

    if height >= 2 {
        lines.push(Line::from(vec![Span::styled(
            " ".repeat(width),
            pattern_style,
        )]));
    }

    let label_content = caption_line(caption, width);
    if selected {
        lines.push(Line::from(vec![Span::styled(
            label_content,
            Style::default().add_modifier(Modifier::BOLD),
        )]));
    } else {
        lines.push(Line::from(label_content));
    }

    while lines.len() < height {
        lines.push(Line::from(vec![Span::styled(
            " ".repeat(width),
            pattern_style,
        )]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_rows_fill_the_exact_width() {
        assert_eq!(repeat_pattern_row("ab", 5), "ababa");
        assert_eq!(repeat_pattern_row("", 3), "   ");
        assert_eq!(repeat_pattern_row("ab", 0), "");
    }

    #[test]
    fn captions_are_bracketed_and_centered() {
        let line = caption_line("Dark", 12);
        assert_eq!(line.len(), 12);
        assert!(line.contains("[ Dark ]"));
    }

    #[test]
    fn long_captions_truncate_to_the_card_width() {
        let line = caption_line("Fullmetal Alchemist: Brotherhood", 10);
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn poster_lines_match_the_card_height() {
        let lines = build_poster_lines("Dark", &["##  ", "  ##"], 10, 6, false);
        assert_eq!(lines.len(), 6);
    }
}
