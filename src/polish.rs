use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule<'a> {
    pub bad: &'a str,
    pub good: &'a str,
}

impl<'a> PhraseRule<'a> {
    pub const fn new(bad: &'a str, good: &'a str) -> Self {
        PhraseRule { bad, good }
    }
}

/// An ordered list of exact substring replacements.
///
/// Rules run one after another over the whole text, each seeing the output
/// of the ones before it. Whole words and phrases must come before the
/// fragment rules: `ոó -> ու` run first would leave `Եիկուշաբթի` behind and
/// the weekday rule would never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable<'a> {
    rules: Vec<PhraseRule<'a>>,
}

impl<'a> PhraseTable<'a> {
    pub fn new(rules: Vec<PhraseRule<'a>>) -> Self {
        PhraseTable { rules }
    }

    pub fn from_pairs(pairs: &[(&'a str, &'a str)]) -> Self {
        PhraseTable::new(pairs.iter().map(|&(bad, good)| PhraseRule::new(bad, good)).collect())
    }

    #[inline]
    pub fn rules(&self) -> &[PhraseRule<'a>] {
        &self.rules
    }

    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).0
    }

    /// Like [`apply`](Self::apply), also returning how many times each rule
    /// matched at the point it ran, in rule order.
    pub fn apply_counted(&self, text: &str) -> (String, Vec<usize>) {
        let mut current = text.to_owned();
        let mut hits = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let n = if rule.bad.is_empty() {
                0
            } else {
                current.matches(rule.bad).count()
            };
            if n > 0 {
                debug!("{} x {:?} -> {:?}", n, rule.bad, rule.good);
                current = current.replace(rule.bad, rule.good);
            }
            hits.push(n);
        }
        (current, hits)
    }
}

pub const PHRASES: &[(&str, &str)] = &[
    // days of the week
    ("Եիկոóշաբթի", "Երկուշաբթի"),
    ("Եիե÷շաբթի", "Երեքշաբթի"),
    ("áոիե÷շաբթի", "Չորեքշաբթի"),
    ("Ոóիբաթ", "Ուրբաթ"),
    // prompts and holiday names
    ("Ցոնեիի անվանոóմնեիը", "Տոների անվանումները"),
    ("øիացոóօց", "Օրացույց"),
    ("Զատկի օիեիը", "Զատկի օրերը"),
    ("Հոգեգալéտօան օիեիը", "Հոգեգալստեան օրերը"),
    ("Վաիդավառի օիեիը", "Վարդավառի օրերը"),
    ("Փոխման Աéտվածածնի օիեիը", "Փոխման Աստվածածնի օրերը"),
    ("Րոóիբ Խաáի տոնի օիեիը", "Սուրբ Խաչի տոնի օրերը"),
    ("Հիéնակամոóտի օիեիը", "Հիսնակամուտի օրերը"),
    // fragments, last
    ("օիեիը", "օրերը"),
    ("ոó", "ու"),
    ("éտօան", "ստեան"),
];

lazy_static! {
    pub static ref DEFAULT_PHRASES: PhraseTable<'static> = PhraseTable::from_pairs(PHRASES);
}

pub fn polish(text: &str) -> String {
    DEFAULT_PHRASES.apply(text)
}

/// Words an operator should find in a correctly repaired calendar file.
pub const SPOT_CHECKS: &[&str] = &["Երկուշաբթի", "Սուրբ Խաչի", "Հոգեգալստեան"];

pub fn spot_check<'w>(text: &str, words: &[&'w str]) -> Vec<(&'w str, bool)> {
    words.iter().map(|&w| (w, text.contains(w))).collect()
}
