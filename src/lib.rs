//! WebAssembly interaction engine for the Valentine celebration page.
//!
//! Exports the page's interactive logic to JavaScript via wasm-bindgen:
//! the 3x3 sliding puzzle, the card tilt math, the click heart burst,
//! the gallery slideshow/tabs, and the quiz with its yes/no prompt.
//! Board data crosses the boundary as a flat `Uint8Array` in row-major
//! layout: `board[row * 3 + col]` maps to the JS tile grid.

pub mod effects;
pub mod gallery;
pub mod puzzle;
pub mod quiz;
pub mod rng;
pub mod solver;
pub mod types;

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use crate::effects;
    use crate::gallery::{Slideshow, TabBar};
    use crate::puzzle::SlidingPuzzle;
    use crate::quiz::{self, AskPrompt};
    use crate::rng::GameRng;
    use crate::{solver, types};
    use wasm_bindgen::prelude::*;

    fn board_array(board: &types::Board) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&board.cells()[..])
    }

    /// The sliding puzzle, one instance per rendered grid.
    #[wasm_bindgen]
    pub struct PuzzleGame {
        engine: SlidingPuzzle,
        rng: GameRng,
    }

    #[wasm_bindgen]
    impl PuzzleGame {
        /// Create a puzzle seeded from browser entropy. The board starts
        /// solved; call `newGame()` to shuffle.
        #[wasm_bindgen(constructor)]
        pub fn new() -> PuzzleGame {
            PuzzleGame {
                engine: SlidingPuzzle::new(),
                rng: GameRng::new(),
            }
        }

        /// Create a deterministically seeded puzzle (replay/debugging).
        #[wasm_bindgen(js_name = "withSeed")]
        pub fn with_seed(seed: u32) -> PuzzleGame {
            PuzzleGame {
                engine: SlidingPuzzle::new(),
                rng: GameRng::from_seed(seed as u64),
            }
        }

        /// Shuffle a fresh, always-solvable board and reset the counter.
        /// Returns `{ board: Uint8Array, moves: number }`.
        #[wasm_bindgen(js_name = "newGame")]
        pub fn new_game(&mut self) -> JsValue {
            self.engine.new_game(&mut self.rng);
            let obj = js_sys::Object::new();
            js_sys::Reflect::set(&obj, &"board".into(), &board_array(self.engine.board()).into())
                .unwrap();
            js_sys::Reflect::set(&obj, &"moves".into(), &self.engine.moves().into()).unwrap();
            obj.into()
        }

        /// Try to slide the piece at `cell` into the blank.
        /// Returns `{ accepted, solved, board: Uint8Array, moves }`.
        #[wasm_bindgen(js_name = "attemptMove")]
        pub fn attempt_move(&mut self, cell: usize) -> JsValue {
            let outcome = self.engine.attempt_move(cell);
            let obj = js_sys::Object::new();
            js_sys::Reflect::set(&obj, &"accepted".into(), &outcome.accepted.into()).unwrap();
            js_sys::Reflect::set(&obj, &"solved".into(), &outcome.solved.into()).unwrap();
            js_sys::Reflect::set(&obj, &"board".into(), &board_array(self.engine.board()).into())
                .unwrap();
            js_sys::Reflect::set(&obj, &"moves".into(), &self.engine.moves().into()).unwrap();
            obj.into()
        }

        #[wasm_bindgen(js_name = "isSolved")]
        pub fn is_solved(&self) -> bool {
            self.engine.is_solved()
        }

        #[wasm_bindgen(js_name = "board")]
        pub fn board(&self) -> js_sys::Uint8Array {
            board_array(self.engine.board())
        }

        #[wasm_bindgen(js_name = "moves")]
        pub fn moves(&self) -> u32 {
            self.engine.moves()
        }

        /// Next cell to click on a shortest solution, or `null` when the
        /// board is already solved.
        #[wasm_bindgen(js_name = "hint")]
        pub fn hint(&self) -> JsValue {
            match solver::hint(self.engine.board()) {
                Some(cell) => (cell as u32).into(),
                None => JsValue::NULL,
            }
        }
    }

    /// Tilt pose for a cursor at (x, y) normalized to [0, 1] over the
    /// element. Returns `{ rotateX, rotateY, css }`.
    #[wasm_bindgen(js_name = "tiltTransform")]
    pub fn wasm_tilt_transform(x: f32, y: f32, max_deg: f32) -> JsValue {
        let tilt = effects::tilt_at(x, y, max_deg);
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"rotateX".into(), &tilt.rotate_x_deg.into()).unwrap();
        js_sys::Reflect::set(&obj, &"rotateY".into(), &tilt.rotate_y_deg.into()).unwrap();
        js_sys::Reflect::set(&obj, &"css".into(), &tilt.css().into()).unwrap();
        obj.into()
    }

    /// Spawn a click heart burst.
    /// Returns an array of `{ glyph, drift_px }`.
    #[wasm_bindgen(js_name = "spawnHearts")]
    pub fn wasm_spawn_hearts() -> JsValue {
        let mut rng = GameRng::new();
        serde_wasm_bindgen::to_value(&effects::heart_burst(&mut rng)).unwrap()
    }

    /// Grade a quiz submission; missing answers grade as incomplete.
    /// Returns `{ score, verdict, message, reveal_ask }`.
    #[wasm_bindgen(js_name = "gradeQuiz")]
    pub fn wasm_grade_quiz(
        color: Option<String>,
        food: Option<String>,
        person: Option<String>,
    ) -> JsValue {
        let outcome = quiz::grade(color.as_deref(), food.as_deref(), person.as_deref());
        serde_wasm_bindgen::to_value(&outcome).unwrap()
    }

    /// The yes/no valentine prompt.
    #[wasm_bindgen]
    pub struct AskButtons {
        prompt: AskPrompt,
        rng: GameRng,
    }

    #[wasm_bindgen]
    impl AskButtons {
        #[wasm_bindgen(constructor)]
        pub fn new() -> AskButtons {
            AskButtons {
                prompt: AskPrompt::new(),
                rng: GameRng::new(),
            }
        }

        /// Returns `{ dx_px, dy_px }` while the button still dodges,
        /// `null` once it has given up.
        #[wasm_bindgen(js_name = "onNoHover")]
        pub fn on_no_hover(&mut self) -> JsValue {
            match self.prompt.on_no_hover(&mut self.rng) {
                Some(dodge) => serde_wasm_bindgen::to_value(&dodge).unwrap(),
                None => JsValue::NULL,
            }
        }

        /// Returns `{ message, color, hide_no, yes_scale }`.
        #[wasm_bindgen(js_name = "onNoClick")]
        pub fn on_no_click(&mut self) -> JsValue {
            serde_wasm_bindgen::to_value(&self.prompt.on_no_click()).unwrap()
        }

        /// Returns `{ message, color, hide_no, yes_scale }`.
        #[wasm_bindgen(js_name = "onYes")]
        pub fn on_yes(&self) -> JsValue {
            serde_wasm_bindgen::to_value(&self.prompt.on_yes()).unwrap()
        }
    }

    /// The photo slideshow position.
    #[wasm_bindgen]
    pub struct SlideshowState {
        inner: Slideshow,
    }

    #[wasm_bindgen]
    impl SlideshowState {
        #[wasm_bindgen(constructor)]
        pub fn new(len: usize) -> SlideshowState {
            SlideshowState {
                inner: Slideshow::new(len),
            }
        }

        #[wasm_bindgen(js_name = "next")]
        pub fn next(&mut self) -> i32 {
            self.inner.next();
            self.inner.offset_percent()
        }

        #[wasm_bindgen(js_name = "prev")]
        pub fn prev(&mut self) -> i32 {
            self.inner.prev();
            self.inner.offset_percent()
        }

        #[wasm_bindgen(js_name = "current")]
        pub fn current(&self) -> usize {
            self.inner.current()
        }

        #[wasm_bindgen(js_name = "offsetPercent")]
        pub fn offset_percent(&self) -> i32 {
            self.inner.offset_percent()
        }
    }

    /// The gallery tab strip.
    #[wasm_bindgen]
    pub struct TabState {
        inner: TabBar,
    }

    #[wasm_bindgen]
    impl TabState {
        #[wasm_bindgen(constructor)]
        pub fn new(len: usize) -> TabState {
            TabState {
                inner: TabBar::new(len),
            }
        }

        #[wasm_bindgen(js_name = "select")]
        pub fn select(&mut self, index: usize) -> usize {
            self.inner.select(index);
            self.inner.active()
        }

        #[wasm_bindgen(js_name = "isActive")]
        pub fn is_active(&self, index: usize) -> bool {
            self.inner.is_active(index)
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM valentine engine ready".to_string()
    }
}
