//! Approximate Hangul rendering of a Latin name, for display only.
//!
//! Known full names map through a small table; anything else is spelled out
//! letter by letter. Characters without a mapping pass through unchanged.
//! The backend's `name_kr` is authoritative for real results.

/// Full names with a conventional Hangul spelling.
const KNOWN_NAMES: [(&str, &str); 16] = [
    ("WILSON", "윌슨"),
    ("SMITH", "스미스"),
    ("JOHN", "존"),
    ("JAMES", "제임스"),
    ("MICHAEL", "마이클"),
    ("DAVID", "데이비드"),
    ("ROBERT", "로버트"),
    ("WILLIAM", "윌리엄"),
    ("MARY", "메리"),
    ("SARAH", "사라"),
    ("EMMA", "엠마"),
    ("OLIVIA", "올리비아"),
    ("JOHNSON", "존슨"),
    ("BROWN", "브라운"),
    ("JONES", "존스"),
    ("MILLER", "밀러"),
];

/// Korean reading of each Latin letter.
const LETTERS: [(char, &str); 26] = [
    ('A', "에이"),
    ('B', "비"),
    ('C', "씨"),
    ('D', "디"),
    ('E', "이"),
    ('F', "에프"),
    ('G', "지"),
    ('H', "에이치"),
    ('I', "아이"),
    ('J', "제이"),
    ('K', "케이"),
    ('L', "엘"),
    ('M', "엠"),
    ('N', "엔"),
    ('O', "오"),
    ('P', "피"),
    ('Q', "큐"),
    ('R', "알"),
    ('S', "에스"),
    ('T', "티"),
    ('U', "유"),
    ('V', "브이"),
    ('W', "더블유"),
    ('X', "엑스"),
    ('Y', "와이"),
    ('Z', "제트"),
];

/// Transliterate one name (e.g. a first name) into Hangul.
pub fn transliterate(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    if let Some((_, hangul)) = KNOWN_NAMES.iter().find(|(known, _)| *known == upper) {
        return (*hangul).to_string();
    }

    upper
        .chars()
        .map(|c| match LETTERS.iter().find(|(letter, _)| *letter == c) {
            Some((_, reading)) => (*reading).to_string(),
            None => c.to_string(),
        })
        .collect()
}

/// Transliterate each whitespace-separated part and rejoin with spaces.
pub fn transliterate_full(name: &str) -> String {
    name.split_whitespace()
        .map(transliterate)
        .collect::<Vec<_>>()
        .join(" ")
}
