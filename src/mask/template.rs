//! Fixed-length templates of literal and variable character slots.
//!
//! A [`Template`] never changes after construction. Buffers share it through
//! an `Arc` and only ever ask it classification questions.

use super::error::MaskError;

/// Character class accepted by a variable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII digits `0-9`
    Digit,
    /// Alphabetic characters
    Letter,
    /// Alphabetic characters or ASCII digits
    Alphanumeric,
    /// Hexadecimal digits `0-9a-fA-F`
    HexDigit,
}

impl CharClass {
    /// Check if `ch` belongs to this class
    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Letter => ch.is_alphabetic(),
            CharClass::Alphanumeric => ch.is_alphabetic() || ch.is_ascii_digit(),
            CharClass::HexDigit => ch.is_ascii_hexdigit(),
        }
    }

    /// The pattern character that produces this class in [`Template::parse`]
    pub fn pattern_char(&self) -> char {
        match self {
            CharClass::Digit => '#',
            CharClass::Letter => '?',
            CharClass::Alphanumeric => 'A',
            CharClass::HexDigit => 'H',
        }
    }

    fn from_pattern_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CharClass::Digit),
            '?' => Some(CharClass::Letter),
            'A' => Some(CharClass::Alphanumeric),
            'H' => Some(CharClass::HexDigit),
            _ => None,
        }
    }
}

/// One position of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A fixed character that always occupies this position
    Literal(char),
    /// Accepts exactly one character of the given class
    Variable(CharClass),
}

impl Slot {
    pub fn is_literal(&self) -> bool {
        matches!(self, Slot::Literal(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Slot::Variable(_))
    }
}

/// Errors that can occur when building a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template has no slots
    Empty,
    /// The pattern ends with an unfinished `\` escape
    DanglingEscape,
    /// The placeholder would be accepted by a variable slot
    PlaceholderAccepted(char),
    /// A literal character would also be accepted by a variable slot
    LiteralAccepted(char),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::Empty => write!(f, "template has no slots"),
            TemplateError::DanglingEscape => write!(f, "pattern ends with a dangling escape"),
            TemplateError::PlaceholderAccepted(c) => {
                write!(f, "placeholder {:?} is accepted by a variable slot", c)
            }
            TemplateError::LiteralAccepted(c) => {
                write!(f, "literal {:?} is accepted by a variable slot", c)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Immutable description of a fixed-format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: Vec<Slot>,
    placeholder: char,
    default_fill: String,
    capacity: usize,
}

impl Template {
    /// Build a template from explicit slot descriptors
    pub fn new(slots: Vec<Slot>, placeholder: char) -> Result<Self, TemplateError> {
        if slots.is_empty() {
            return Err(TemplateError::Empty);
        }
        let placeholder_accepted = slots.iter().any(|slot| match slot {
            Slot::Variable(class) => class.matches(placeholder),
            Slot::Literal(_) => false,
        });
        if placeholder_accepted {
            return Err(TemplateError::PlaceholderAccepted(placeholder));
        }
        // Literals must stay distinguishable from data when extracting
        let classes: Vec<CharClass> = slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Variable(class) => Some(*class),
                Slot::Literal(_) => None,
            })
            .collect();
        for slot in &slots {
            if let Slot::Literal(c) = slot {
                if classes.iter().any(|class| class.matches(*c)) {
                    return Err(TemplateError::LiteralAccepted(*c));
                }
            }
        }

        let default_fill = slots
            .iter()
            .map(|slot| match slot {
                Slot::Literal(c) => *c,
                Slot::Variable(_) => placeholder,
            })
            .collect();
        let capacity = slots.iter().filter(|s| s.is_variable()).count();

        Ok(Self {
            slots,
            placeholder,
            default_fill,
            capacity,
        })
    }

    /// Parse a mask pattern.
    ///
    /// `#` digit, `?` letter, `A` letter or digit, `H` hex digit.
    /// `\x` makes `x` a literal; every other character is a literal.
    pub fn parse(pattern: &str, placeholder: char) -> Result<Self, TemplateError> {
        let mut slots = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                let escaped = chars.next().ok_or(TemplateError::DanglingEscape)?;
                slots.push(Slot::Literal(escaped));
            } else if let Some(class) = CharClass::from_pattern_char(ch) {
                slots.push(Slot::Variable(class));
            } else {
                slots.push(Slot::Literal(ch));
            }
        }
        Self::new(slots, placeholder)
    }

    /// The `(###)###-####` phone number layout with blank placeholders
    pub fn phone() -> Self {
        let mut slots = vec![Slot::Literal('(')];
        slots.extend([Slot::Variable(CharClass::Digit); 3]);
        slots.push(Slot::Literal(')'));
        slots.extend([Slot::Variable(CharClass::Digit); 3]);
        slots.push(Slot::Literal('-'));
        slots.extend([Slot::Variable(CharClass::Digit); 4]);
        Self {
            default_fill: "(   )   -    ".to_string(),
            capacity: 10,
            placeholder: ' ',
            slots,
        }
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false, templates have at least one slot
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Filler character of an empty variable slot
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Number of variable slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The string with every variable slot empty
    pub fn default_fill(&self) -> &str {
        &self.default_fill
    }

    pub fn slot_at(&self, position: usize) -> Result<Slot, MaskError> {
        self.slots
            .get(position)
            .copied()
            .ok_or(MaskError::OutOfRange {
                offset: position,
                len: self.slots.len(),
            })
    }

    /// Out-of-range positions are neither literal nor variable
    pub fn is_literal(&self, position: usize) -> bool {
        matches!(self.slots.get(position), Some(Slot::Literal(_)))
    }

    pub fn is_variable(&self, position: usize) -> bool {
        matches!(self.slots.get(position), Some(Slot::Variable(_)))
    }

    /// The fixed character at `position`, if it is a literal slot
    pub fn literal_at(&self, position: usize) -> Option<char> {
        match self.slots.get(position) {
            Some(Slot::Literal(c)) => Some(*c),
            _ => None,
        }
    }

    /// Check if `ch` can be stored in the slot at `position`
    pub fn slot_accepts(&self, position: usize, ch: char) -> bool {
        match self.slots.get(position) {
            Some(Slot::Variable(class)) => class.matches(ch),
            _ => false,
        }
    }

    /// Check if any variable slot of the template accepts `ch`
    pub fn accepts(&self, ch: char) -> bool {
        self.slots.iter().any(|slot| match slot {
            Slot::Variable(class) => class.matches(ch),
            Slot::Literal(_) => false,
        })
    }

    /// Check if `ch` is one of the template's literal characters
    pub fn is_literal_char(&self, ch: char) -> bool {
        self.slots.contains(&Slot::Literal(ch))
    }

    pub fn first_variable(&self) -> Option<usize> {
        self.next_variable(0)
    }

    pub fn last_variable(&self) -> Option<usize> {
        self.prev_variable(self.slots.len())
    }

    /// First variable slot at or after `from`
    pub fn next_variable(&self, from: usize) -> Option<usize> {
        (from..self.slots.len()).find(|&pos| self.slots[pos].is_variable())
    }

    /// Last variable slot strictly before `before`
    pub fn prev_variable(&self, before: usize) -> Option<usize> {
        (0..before.min(self.slots.len()))
            .rev()
            .find(|&pos| self.slots[pos].is_variable())
    }

    /// Number of variable slots in `offset..len`
    pub fn variable_slots_from(&self, offset: usize) -> usize {
        self.slots
            .iter()
            .skip(offset)
            .filter(|slot| slot.is_variable())
            .count()
    }

    /// The pattern string that [`Template::parse`] would turn back into this template
    pub fn pattern(&self) -> String {
        let mut out = String::with_capacity(self.slots.len());
        for slot in &self.slots {
            match slot {
                Slot::Variable(class) => out.push(class.pattern_char()),
                Slot::Literal(c) => {
                    if CharClass::from_pattern_char(*c).is_some() || *c == '\\' {
                        out.push('\\');
                    }
                    out.push(*c);
                }
            }
        }
        out
    }
}
