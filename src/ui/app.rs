//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, RichText, SidePanel, TopBottomPanel};

use crate::{SearchConfig, Stone, CAPTURE_WIN};

use super::board_view::BoardView;
use super::game_state::GameSession;
use super::theme::*;

/// Human versus computer window
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, human: Stone, config: SearchConfig) -> Self {
        Self {
            session: GameSession::new(human, config),
            board_view: BoardView::default(),
        }
    }

    /// Render the side panel with turn, captures and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel").min_width(200.0).show(ctx, |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
            ui.add_space(12.0);

            let turn = self.session.board.current_stone();
            let turn_text = if self.session.is_over() {
                "Game over".to_string()
            } else if self.session.is_ai_thinking() {
                format!("{} (computer) to move", turn.name())
            } else {
                format!("{} to move", turn.name())
            };
            ui.label(RichText::new(turn_text).size(14.0).color(TEXT_PRIMARY));

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(THINKING),
                );
            }

            ui.add_space(12.0);
            ui.label(RichText::new("Captures").size(12.0).color(TEXT_SECONDARY));
            for stone in [Stone::Black, Stone::White] {
                let count = self.session.board.captures(stone);
                ui.label(
                    RichText::new(format!("{}: {}/{}", stone.name(), count, CAPTURE_WIN))
                        .size(14.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(secs) = self.session.last_ai_seconds {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Last search: {:.3}s", secs))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.session.reset();
                }
                if ui.button("Undo (U)").clicked() {
                    self.session.undo();
                }
            });
            ui.label(
                RichText::new(format!("Move #{}", self.session.board.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Status line at the bottom of the window
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(RichText::new(&self.session.status).size(13.0));
        });
    }

    /// Render the board and forward clicks to the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.session.is_human_turn() && !self.session.is_ai_thinking();
            let clicked = self.board_view.show(
                ui,
                &self.session.board,
                self.session.winning_line.as_deref(),
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place_stone(pos) {
                    self.session.status = msg;
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.session.undo();
        }
        if new_game {
            self.session.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();
        if self.session.is_ai_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_status_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
