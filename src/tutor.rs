//! Strategy hints for the human player
//!
//! The tutor picks the part of its knowledge base that matches the student's
//! question and builds a Socratic prompt around it and the current board. The
//! prompt is meant for a text-generation service; without one, the tutor
//! falls back to a short canned reply.

use tracing::{info, warn};

use std::fs;
use std::path::Path;

use crate::board::Board;

const CENTER_CONTROL_FALLBACK: &str = "Controlling the center column is important in Connect 4.";
const THREAT_ANALYSIS_FALLBACK: &str =
    "Threats are potential winning combinations that need to be blocked.";

const CENTER_KEYWORDS: [&str; 4] = ["center", "middle", "column 3", "column 4"];
const THREAT_KEYWORDS: [&str; 5] = ["threat", "block", "defend", "three", "winning"];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Strategy {
    CenterControl,
    ThreatAnalysis,
}

impl Strategy {
    /// Picks the strategy a question is about, defaulting to center control
    pub fn for_question(question: &str) -> Self {
        let question = question.to_lowercase();
        if CENTER_KEYWORDS.iter().any(|word| question.contains(word)) {
            Strategy::CenterControl
        } else if THREAT_KEYWORDS.iter().any(|word| question.contains(word)) {
            Strategy::ThreatAnalysis
        } else {
            Strategy::CenterControl
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Strategy::CenterControl => "center_control.md",
            Strategy::ThreatAnalysis => "threat_analysis.md",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            Strategy::CenterControl => CENTER_CONTROL_FALLBACK,
            Strategy::ThreatAnalysis => THREAT_ANALYSIS_FALLBACK,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KnowledgeBase {
    center_control: String,
    threat_analysis: String,
}

impl KnowledgeBase {
    /// Loads each strategy text from `dir`, using a built-in summary for any file that can't be read
    pub fn load<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let read = |strategy: Strategy| {
            let path = dir.join(strategy.file_name());
            match fs::read_to_string(&path) {
                Ok(text) => {
                    info!(path = %path.display(), "loaded knowledge base entry");
                    text
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "using built-in knowledge base entry");
                    strategy.fallback().to_string()
                }
            }
        };

        Self {
            center_control: read(Strategy::CenterControl),
            threat_analysis: read(Strategy::ThreatAnalysis),
        }
    }

    pub fn get(&self, strategy: Strategy) -> &str {
        match strategy {
            Strategy::CenterControl => &self.center_control,
            Strategy::ThreatAnalysis => &self.threat_analysis,
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            center_control: CENTER_CONTROL_FALLBACK.to_string(),
            threat_analysis: THREAT_ANALYSIS_FALLBACK.to_string(),
        }
    }
}

/// Renders the board for inclusion in a prompt
pub fn board_text(board: &Board) -> String {
    format!("Current Board State:\n{}", board)
}

#[derive(Clone, Debug, Default)]
pub struct Tutor {
    knowledge_base: KnowledgeBase,
}

impl Tutor {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Builds the prompt asking a language model to answer with a guiding question
    pub fn prompt(&self, board: &Board, question: &str) -> String {
        let strategy = self.knowledge_base.get(Strategy::for_question(question));
        format!(
            "You are a helpful Connect 4 tutor using the Socratic method. \
Your goal is to guide the student to discover the answer themselves rather than giving direct answers.

{board}
Relevant strategy information:
{strategy}

Student's question: {question}

Instructions:
1. Analyze the board state and the student's question
2. Consider the relevant strategy information provided
3. Instead of giving a direct answer, ask a guiding question that will help the student think through the problem
4. Your response should be encouraging and educational
5. Keep your response concise (2-3 sentences maximum)
6. Focus on helping the student develop strategic thinking skills

Remember: You are a tutor, not a coach. Guide the student to discover the answer through thoughtful questioning.
",
            board = board_text(board),
            strategy = strategy.trim_end(),
            question = question.trim(),
        )
    }

    /// A short hint for when no language model is available
    pub fn offline_reply(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();
        if question.contains("center") || question.contains("middle") {
            "Consider placing your piece in the center column (column 4) - it gives you the most opportunities to create winning combinations!"
        } else if question.contains("threat") || question.contains("block") {
            "Look for any three-in-a-row patterns that your opponent could complete. Blocking these threats is crucial!"
        } else {
            "Try to control the center and look for opportunities to create multiple threats simultaneously!"
        }
    }
}
