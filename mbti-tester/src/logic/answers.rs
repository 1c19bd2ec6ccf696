//! Answer trails: parsing, enumeration, and seeded generation.
use anyhow::{Result, bail};
use mbti_quiz::{Axis, Letter, QuestionBank, TypologyCode};
use rand::Rng;

/// Parse a trail such as `YNYN...` (also `y`/`n`, `1`/`0`; spaces and commas ignored).
pub fn parse_answers(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_uppercase() {
            'Y' | '1' => Ok(true),
            'N' | '0' => Ok(false),
            other => bail!("invalid answer '{other}', expected Y or N"),
        })
        .collect()
}

pub fn format_answers(answers: &[bool]) -> String {
    answers
        .iter()
        .map(|is_yes| if *is_yes { 'Y' } else { 'N' })
        .collect()
}

/// The trail whose bit `i` is the answer to question `i`.
pub fn answers_from_bits(bits: u32, len: usize) -> Vec<bool> {
    (0..len).map(|i| bits & (1 << i) != 0).collect()
}

pub fn random_answers<R: Rng>(rng: &mut R, len: usize) -> Vec<bool> {
    (0..len).map(|_| rng.gen_bool(0.5)).collect()
}

/// Code predicted for a trail by counting letters per axis directly.
pub fn expected_code(bank: &QuestionBank, answers: &[bool]) -> TypologyCode {
    let mut counts = [[0_u32; 2]; 4];
    for (question, is_yes) in bank.iter().zip(answers) {
        let letter: Letter = question.letter_for(*is_yes);
        let axis = letter.axis();
        let side = usize::from(letter != axis.first());
        counts[axis.index()][side] += 1;
    }
    TypologyCode::from_axes(|axis: Axis| {
        let [first, second] = counts[axis.index()];
        if second > first { axis.second() } else { axis.first() }
    })
}
