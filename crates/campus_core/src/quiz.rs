//! Quiz question bank and grading
//!
//! Twelve questions; a quiz session uses the first ten (or a random
//! sample). Passing requires seven correct answers.

use rand::seq::SliceRandom;

/// Number of questions in one quiz session.
pub const QUIZ_LENGTH: usize = 10;

/// Minimum correct answers to pass.
pub const QUIZ_PASS_SCORE: u32 = 7;

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: &'static str,
}

pub const QUESTION_BANK: [QuizQuestion; 12] = [
    QuizQuestion {
        question: "Why is USDC particularly useful for receiving money from abroad?",
        options: [
            "It can only be used locally",
            "It's fast, stable, and avoids bank delays & high fees",
            "It's controlled by the government",
            "It requires a special bank account",
        ],
        correct_answer: 1,
        explanation: "USDC maintains a stable $1 value and settles in seconds.",
    },
    QuizQuestion {
        question: "What is the main advantage of Solana for micro-transactions?",
        options: [
            "It requires minimum $100 transactions",
            "Transaction fees are less than $0.01",
            "It's only available in one country",
            "It takes 3-5 business days",
        ],
        correct_answer: 1,
        explanation: "Solana's ultra-low fees make it ideal for small payments.",
    },
    QuizQuestion {
        question: "How does USDC protect against local currency volatility?",
        options: [
            "It's pegged to the local currency",
            "It's pegged 1:1 to the US Dollar",
            "Its value changes daily",
            "It's backed by local banks",
        ],
        correct_answer: 1,
        explanation: "USDC is a stablecoin pegged to the US Dollar.",
    },
    QuizQuestion {
        question: "What is a 'public key' in Solana?",
        options: [
            "Your password to access the network",
            "Your wallet address that receives funds",
            "A secret code you must never share",
            "Your bank account number",
        ],
        correct_answer: 1,
        explanation: "Your public key is like your account number - safe to share.",
    },
    QuizQuestion {
        question: "Which of these is an everyday use case for Solana Pay?",
        options: [
            "Only for buying cars",
            "Instant payments at campus canteens & shops",
            "International wire transfers only",
            "Stock market trading",
        ],
        correct_answer: 1,
        explanation: "Solana Pay enables instant, low-fee everyday payments.",
    },
    QuizQuestion {
        question: "What makes compressed NFTs special on Solana?",
        options: [
            "They cost hundreds of dollars to mint",
            "They're extremely cheap to create (less than $0.01)",
            "They can only be used once",
            "They require a physical card",
        ],
        correct_answer: 1,
        explanation: "State compression makes minting badges affordable for everyone.",
    },
    QuizQuestion {
        question: "What should you NEVER share with anyone?",
        options: [
            "Your public wallet address",
            "Your private key or seed phrase",
            "Your username",
            "Your university name",
        ],
        correct_answer: 1,
        explanation: "Your private key controls your funds. Never share it.",
    },
    QuizQuestion {
        question: "How can Solana help freelancers?",
        options: [
            "It can't help freelancers",
            "Receive international payments instantly with low fees",
            "Only works for full-time employees",
            "Requires a US bank account",
        ],
        correct_answer: 1,
        explanation: "Freelancers can receive payments worldwide in seconds.",
    },
    QuizQuestion {
        question: "What is 'devnet' in Solana?",
        options: [
            "The main network with real money",
            "A test network for learning without real funds",
            "A region-locked network",
            "A type of cryptocurrency",
        ],
        correct_answer: 1,
        explanation: "Devnet is a test environment with free SOL of no real value.",
    },
    QuizQuestion {
        question: "Why might a student choose USDC over traditional savings?",
        options: [
            "Higher volatility for bigger gains",
            "Stability and easy access to global markets",
            "Required by all universities",
            "Only option for student loans",
        ],
        correct_answer: 1,
        explanation: "USDC offers dollar stability and global accessibility.",
    },
    QuizQuestion {
        question: "What happens when you complete all the onboarding quests?",
        options: [
            "You get a physical certificate",
            "You mint an exclusive NFT badge",
            "You receive $1000 automatically",
            "Nothing happens",
        ],
        correct_answer: 1,
        explanation: "Completing all quests earns a compressed NFT badge.",
    },
    QuizQuestion {
        question: "Which wallets are popular for Solana?",
        options: [
            "Only MetaMask",
            "Phantom and Solflare",
            "PayPal and Venmo",
            "Only bank apps",
        ],
        correct_answer: 1,
        explanation: "Phantom and Solflare are the most popular Solana wallets.",
    },
];

/// The questions for a standard quiz session (first ten of the bank).
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUESTION_BANK[..QUIZ_LENGTH]
}

/// A shuffled sample of `count` questions from the bank.
pub fn random_questions(count: usize) -> Vec<QuizQuestion> {
    let mut shuffled: Vec<QuizQuestion> = QUESTION_BANK.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled.truncate(count);
    shuffled
}

/// Count correct picks. Extra answers beyond the session length are
/// ignored; missing answers count as wrong.
pub fn grade(questions: &[QuizQuestion], answers: &[usize]) -> u32 {
    questions
        .iter()
        .zip(answers.iter())
        .filter(|(q, a)| q.correct_answer == **a)
        .count() as u32
}

pub fn passed(score: u32) -> bool {
    score >= QUIZ_PASS_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_has_ten_questions() {
        assert_eq!(quiz_questions().len(), QUIZ_LENGTH);
    }

    #[test]
    fn test_grade_all_correct() {
        let questions = quiz_questions();
        let answers: Vec<usize> = questions.iter().map(|q| q.correct_answer).collect();
        assert_eq!(grade(questions, &answers), 10);
        assert!(passed(grade(questions, &answers)));
    }

    #[test]
    fn test_grade_all_wrong() {
        let questions = quiz_questions();
        let answers: Vec<usize> = questions
            .iter()
            .map(|q| (q.correct_answer + 1) % 4)
            .collect();
        assert_eq!(grade(questions, &answers), 0);
        assert!(!passed(0));
    }

    #[test]
    fn test_grade_partial_answers() {
        let questions = quiz_questions();
        // Only answered the first three, all correct.
        let answers: Vec<usize> = questions[..3].iter().map(|q| q.correct_answer).collect();
        assert_eq!(grade(questions, &answers), 3);
    }

    #[test]
    fn test_pass_threshold() {
        assert!(!passed(6));
        assert!(passed(7));
        assert!(passed(10));
    }

    #[test]
    fn test_random_questions_count() {
        assert_eq!(random_questions(10).len(), 10);
        assert_eq!(random_questions(12).len(), 12);
    }

    #[test]
    fn test_correct_answers_in_range() {
        for question in QUESTION_BANK.iter() {
            assert!(question.correct_answer < question.options.len());
        }
    }
}
