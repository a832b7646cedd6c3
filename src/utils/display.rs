//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use itertools::Itertools;

/// Glyphs and spacing used when turning a grid into a text frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStyle {
    pub alive: char,
    pub dead: char,
    pub padding_lines: usize,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for FrameStyle {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            alive: config.alive_glyph,
            dead: config.dead_glyph,
            padding_lines: config.padding_lines,
        }
    }
}

/// Render one frame: a line per row with cells separated by single spaces,
/// followed by `padding_lines` blank lines.
pub fn render_frame(grid: &Grid, style: &FrameStyle) -> String {
    let line_len = grid.cols() * 2 * style.alive.len_utf8().max(style.dead.len_utf8()) + 1;
    let mut output = String::with_capacity(grid.rows() * line_len + style.padding_lines);

    for row in grid.iter_rows() {
        let line = row
            .iter()
            .map(|&alive| if alive { style.alive } else { style.dead })
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }

    for _ in 0..style.padding_lines {
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let cells = vec![vec![true, false, true], vec![false, true, false]];
        let grid = Grid::from_cells(cells).unwrap();

        let frame = render_frame(&grid, &FrameStyle::default());
        assert_eq!(frame, "█   █\n  █  \n\n\n");
    }

    #[test]
    fn test_frame_has_one_line_per_row() {
        let grid = Grid::new(4, 6);
        let style = FrameStyle {
            alive: '#',
            dead: '.',
            padding_lines: 0,
        };

        let frame = render_frame(&grid, &style);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| *line == ". . . . . ."));
    }

    #[test]
    fn test_single_cell_frame() {
        let grid = Grid::from_cells(vec![vec![true]]).unwrap();
        let style = FrameStyle {
            padding_lines: 1,
            ..FrameStyle::default()
        };
        assert_eq!(render_frame(&grid, &style), "█\n\n");
    }
}
