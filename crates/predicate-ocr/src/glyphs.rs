//! Digit/symbol look-alike table used by both the estimator and the corrector.

/// Misread glyph → intended upper-case letter.
pub const LOOKALIKES: &[(char, char)] = &[
    ('0', 'O'),
    ('1', 'I'),
    ('3', 'E'),
    ('4', 'A'),
    ('5', 'S'),
    ('6', 'G'),
    ('7', 'T'),
    ('8', 'B'),
    ('|', 'I'),
    ('$', 'S'),
    ('@', 'A'),
];

/// The letter a misread glyph most likely stands for.
pub fn lookalike(c: char) -> Option<char> {
    LOOKALIKES
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, letter)| *letter)
}

/// Letters and digits in a token. Look-alike symbols count as neither.
pub fn letter_digit_counts(token: &str) -> (usize, usize) {
    token.chars().fold((0, 0), |(letters, digits), c| {
        if c.is_alphabetic() {
            (letters + 1, digits)
        } else if c.is_ascii_digit() {
            (letters, digits + 1)
        } else {
            (letters, digits)
        }
    })
}

/// A token that is mostly a word, so digits inside it are suspicious.
pub fn is_alpha_dominant(token: &str, min_letters: usize) -> bool {
    let (letters, digits) = letter_digit_counts(token);
    letters >= min_letters && letters > digits
}

/// Byte offsets of look-alike glyphs in `token` that touch a letter.
pub fn suspicious_glyphs(token: &str) -> Vec<(usize, char)> {
    let chars: Vec<(usize, char)> = token.char_indices().collect();
    chars
        .iter()
        .enumerate()
        .filter(|(_, (_, c))| lookalike(*c).is_some())
        .filter(|(i, _)| {
            let before = i.checked_sub(1).and_then(|j| chars.get(j)).map(|(_, c)| *c);
            let after = chars.get(i + 1).map(|(_, c)| *c);
            before.is_some_and(char::is_alphabetic) || after.is_some_and(char::is_alphabetic)
        })
        .map(|(_, &(offset, c))| (offset, c))
        .collect()
}

/// Split `text` into whitespace-separated tokens with their byte offsets.
pub fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace().map(move |token| {
        let offset = token.as_ptr() as usize - text.as_ptr() as usize;
        (offset, token)
    })
}
