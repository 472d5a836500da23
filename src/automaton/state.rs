//! States and transition table of the day-name automaton.
//!
//! States reached by a single keyword are named after the prefix consumed so
//! far (`Sat` = "sat"). States reached by more than one keyword are named
//! after the suffix still required (`Esday` follows both "tu" and "wedn").
//!
//! Only the edges leaving `Start` accept an uppercase letter.

use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    S,
    M,
    T,
    W,
    F,
    Sa,
    Th,
    We,
    Fr,
    Sat,
    Thu,
    Wed,
    Satu,
    Nday,
    Esday,
    Sday,
    Day,
    Ay,
    Y,
    Accept,
}

impl State {
    #[cfg(test)]
    pub const ALL: [State; 21] = [
        State::Start,
        State::S,
        State::M,
        State::T,
        State::W,
        State::F,
        State::Sa,
        State::Th,
        State::We,
        State::Fr,
        State::Sat,
        State::Thu,
        State::Wed,
        State::Satu,
        State::Nday,
        State::Esday,
        State::Sday,
        State::Day,
        State::Ay,
        State::Y,
        State::Accept,
    ];

    /// Follow the edge labelled `ch`, if there is one.
    pub fn next(self, ch: char) -> Option<State> {
        self.edges()?.get(&ch).copied()
    }

    pub fn is_accepting(self) -> bool {
        self == State::Accept
    }

    /// Outgoing edges. `Accept` has none.
    pub fn edges(self) -> Option<&'static Map<char, State>> {
        let edges = match self {
            State::Start => &FROM_START,
            State::S => &FROM_S,
            State::M => &FROM_M,
            State::T => &FROM_T,
            State::W => &FROM_W,
            State::F => &FROM_F,
            State::Sa => &FROM_SA,
            State::Th => &FROM_TH,
            State::We => &FROM_WE,
            State::Fr => &FROM_FR,
            State::Sat => &FROM_SAT,
            State::Thu => &FROM_THU,
            State::Wed => &FROM_WED,
            State::Satu => &FROM_SATU,
            State::Nday => &FROM_NDAY,
            State::Esday => &FROM_ESDAY,
            State::Sday => &FROM_SDAY,
            State::Day => &FROM_DAY,
            State::Ay => &FROM_AY,
            State::Y => &FROM_Y,
            State::Accept => return None,
        };
        Some(edges)
    }
}

static FROM_START: Map<char, State> = phf_map! {
    'f' => State::F, 'F' => State::F,
    'm' => State::M, 'M' => State::M,
    's' => State::S, 'S' => State::S,
    't' => State::T, 'T' => State::T,
    'w' => State::W, 'W' => State::W,
};

static FROM_S: Map<char, State> = phf_map! {
    'a' => State::Sa,
    'u' => State::Nday,
};

static FROM_M: Map<char, State> = phf_map! {
    'o' => State::Nday,
};

static FROM_T: Map<char, State> = phf_map! {
    'h' => State::Th,
    'u' => State::Esday,
};

static FROM_W: Map<char, State> = phf_map! {
    'e' => State::We,
};

static FROM_F: Map<char, State> = phf_map! {
    'r' => State::Fr,
};

static FROM_SA: Map<char, State> = phf_map! {
    't' => State::Sat,
};

static FROM_TH: Map<char, State> = phf_map! {
    'u' => State::Thu,
};

static FROM_WE: Map<char, State> = phf_map! {
    'd' => State::Wed,
};

static FROM_FR: Map<char, State> = phf_map! {
    'i' => State::Day,
};

static FROM_SAT: Map<char, State> = phf_map! {
    'u' => State::Satu,
};

static FROM_THU: Map<char, State> = phf_map! {
    'r' => State::Sday,
};

static FROM_WED: Map<char, State> = phf_map! {
    'n' => State::Esday,
};

static FROM_SATU: Map<char, State> = phf_map! {
    'r' => State::Day,
};

static FROM_NDAY: Map<char, State> = phf_map! {
    'n' => State::Day,
};

static FROM_ESDAY: Map<char, State> = phf_map! {
    'e' => State::Sday,
};

static FROM_SDAY: Map<char, State> = phf_map! {
    's' => State::Day,
};

static FROM_DAY: Map<char, State> = phf_map! {
    'd' => State::Ay,
};

static FROM_AY: Map<char, State> = phf_map! {
    'a' => State::Y,
};

static FROM_Y: Map<char, State> = phf_map! {
    'y' => State::Accept,
};
