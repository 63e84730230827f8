#![allow(dead_code)]

use maze_runner::core::{MazeGrid, Vec2};
use maze_runner::models::GameRenderState;
use maze_runner::session::{EventSource, InputEvent, Prompter, Renderer};
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

pub const GRID_SIZE: usize = 20;

/// Column 1 open from the top down to row 18, row 18 open end to end.
pub fn corridor_rows() -> Vec<String> {
    let mut rows = Vec::new();
    for _ in 0..18 {
        rows.push(format!("#.{}", "#".repeat(GRID_SIZE - 2)));
    }
    rows.push(".".repeat(GRID_SIZE));
    rows.push("#".repeat(GRID_SIZE));
    rows
}

pub fn map_file_from_rows(rows: &[String]) -> String {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|ch| if ch == '#' { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(",")
        })
        .map(|line| line + "\n")
        .collect()
}

/// Writes a map file under a per-test temp directory and returns its path.
pub fn write_map(test_name: &str, file_name: &str, rows: &[String]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "maze_runner_{}_{}",
        test_name,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, map_file_from_rows(rows)).unwrap();
    path
}

pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub announcements: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompter {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
            announcements: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }

    fn announce(&mut self, line: &str) {
        self.announcements.push(line.to_string());
    }
}

/// Replays a fixed list of events, then quits.
pub struct ScriptedEvents {
    events: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        ScriptedEvents {
            events: events.into_iter().collect(),
        }
    }

    pub fn none() -> Self {
        ScriptedEvents {
            events: VecDeque::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub grid: MazeGrid,
    pub player: Vec2,
    pub won: bool,
    pub step: Option<(Vec2, Vec2)>,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
    pub opened: usize,
    pub closed: usize,
}

impl Renderer for RecordingRenderer {
    fn open(&mut self) -> io::Result<()> {
        self.opened += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed += 1;
        Ok(())
    }

    fn draw_full(&mut self, state: &GameRenderState) -> io::Result<()> {
        self.frames.push(Frame {
            grid: state.grid.clone(),
            player: state.player.position(),
            won: state.won,
            step: None,
        });
        Ok(())
    }

    fn draw_step(&mut self, state: &GameRenderState, from: Vec2, to: Vec2) -> io::Result<()> {
        self.frames.push(Frame {
            grid: state.grid.clone(),
            player: state.player.position(),
            won: state.won,
            step: Some((from, to)),
        });
        Ok(())
    }
}
