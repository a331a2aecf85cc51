// ABOUTME: Atom and Expression types representing slisp values and syntax trees

use std::fmt;

/// Numeric comparison tolerance used throughout the interpreter.
///
/// Two numbers are considered equal when they differ by no more than
/// machine epsilon.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON
}

/// A 2-D point with real coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A directed segment between two points.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub first: Point,
    pub second: Point,
}

/// An ellipse arc described by its center, a start point, and a signed
/// angular span in radians.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub center: Point,
    pub start: Point,
    pub span: f64,
}

impl Arc {
    /// Side length of the square bounding box a renderer should use:
    /// `2 * max(|cx - sx|, |sy - cy|)`, centred on the arc's center.
    pub fn bounding_side(&self) -> f64 {
        2.0 * f64::max(
            (self.center.x - self.start.x).abs(),
            (self.start.y - self.center.y).abs(),
        )
    }

    /// Top-left corner of the bounding square.
    pub fn bounding_origin(&self) -> Point {
        let half = self.bounding_side() / 2.0;
        Point {
            x: self.center.x - half,
            y: self.center.y - half,
        }
    }

    /// Angle of the start point as seen from the center, in radians.
    /// Renderers apply their own unit convention on top of this.
    pub fn start_angle(&self) -> f64 {
        ((self.start.y - self.center.y).abs() / (self.center.x - self.start.x).abs()).atan()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.start == other.start && approx_eq(self.span, other.span)
    }
}

/// A tagged leaf-level value in the language.
///
/// `List` never carries data: it is the head tag marking a non-atomic
/// expression whose meaning lives in the expression's tail.
#[derive(Debug, Clone)]
pub enum Atom {
    None,
    Bool(bool),
    Number(f64),
    Symbol(String),
    Point(Point),
    Line(Line),
    Arc(Arc),
    List,
}

impl Atom {
    /// Human-readable kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Atom::None => "None",
            Atom::Bool(_) => "Boolean",
            Atom::Number(_) => "Number",
            Atom::Symbol(_) => "Symbol",
            Atom::Point(_) => "Point",
            Atom::Line(_) => "Line",
            Atom::Arc(_) => "Arc",
            Atom::List => "List",
        }
    }

    /// True for the atoms `draw` accepts: `Point`, `Line`, and `Arc`.
    pub fn is_graphic(&self) -> bool {
        matches!(self, Atom::Point(_) | Atom::Line(_) | Atom::Arc(_))
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::None, Atom::None) => true,
            (Atom::Bool(a), Atom::Bool(b)) => a == b,
            (Atom::Number(a), Atom::Number(b)) => approx_eq(*a, *b),
            (Atom::Symbol(a), Atom::Symbol(b)) => a == b,
            (Atom::Point(a), Atom::Point(b)) => a == b,
            (Atom::Line(a), Atom::Line(b)) => a == b,
            (Atom::Arc(a), Atom::Arc(b)) => a == b,
            (Atom::List, Atom::List) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{} {})", self.center, self.start, self.span)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::None => write!(f, "None"),
            Atom::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Atom::Number(n) => write!(f, "{}", n),
            Atom::Symbol(s) => write!(f, "{}", s),
            Atom::Point(p) => write!(f, "{}", p),
            Atom::Line(l) => write!(f, "{}", l),
            Atom::Arc(a) => write!(f, "{}", a),
            Atom::List => Ok(()),
        }
    }
}

/// An expression tree: a head atom plus an ordered sequence of children.
///
/// Atomic expressions are leaves with an empty tail; a `List` head means
/// the semantic content is the tail. The reader never produces a `List`
/// head with an empty tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub head: Atom,
    pub tail: Vec<Expression>,
}

impl Expression {
    /// The `None` sentinel expression.
    pub fn none() -> Self {
        Expression {
            head: Atom::None,
            tail: Vec::new(),
        }
    }

    /// An atomic leaf expression.
    pub fn atom(head: Atom) -> Self {
        Expression {
            head,
            tail: Vec::new(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Expression::atom(Atom::Bool(value))
    }

    pub fn number(value: f64) -> Self {
        Expression::atom(Atom::Number(value))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::atom(Atom::Symbol(name.into()))
    }

    /// A list-headed expression with the given children.
    pub fn list(tail: Vec<Expression>) -> Self {
        Expression {
            head: Atom::List,
            tail,
        }
    }
}

impl Default for Expression {
    fn default() -> Self {
        Expression::none()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (i, sub) in self.tail.iter().enumerate() {
            if i == 0 && matches!(self.head, Atom::List) {
                write!(f, "{}", sub)?;
            } else {
                write!(f, " {}", sub)?;
            }
        }
        Ok(())
    }
}

/// Recognize the atom a single token denotes.
///
/// Numbers win over symbols; the bare operator tokens `+ - * /` are
/// symbols, never numbers. Returns `None` for tokens that are not a valid
/// number, boolean, or symbol.
pub fn token_to_atom(token: &str) -> Option<Atom> {
    if token.is_empty() {
        return None;
    }

    if is_number_token(token) {
        // The shape is numeric; conversion still rejects malformed or
        // out-of-range values such as "1e999" or "-.".
        let parsed = token.parse::<f64>().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        return Some(Atom::Number(parsed));
    }

    match token {
        "True" => return Some(Atom::Bool(true)),
        "False" => return Some(Atom::Bool(false)),
        _ => {}
    }

    let first = token.chars().next()?;
    if first.is_alphabetic()
        || matches!(token, "+" | "-" | "*" | "/" | "<" | ">" | ">=" | "<=" | "=")
    {
        return Some(Atom::Symbol(token.to_string()));
    }

    None
}

/// Numeric token shape: optional sign, digits, at most one decimal point
/// (not after the exponent), at most one `e`/`E` with an optional sign.
fn is_number_token(token: &str) -> bool {
    if matches!(token, "+" | "-" | "*" | "/") {
        return false;
    }

    let bytes = token.as_bytes();
    let mut dot_seen = false;
    let mut exp_seen = false;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if i == 0 && (c == b'+' || c == b'-') {
            // leading sign
        } else if c.is_ascii_digit() {
            // digit
        } else if c == b'.' && !dot_seen && !exp_seen {
            dot_seen = true;
        } else if (c == b'e' || c == b'E') && !exp_seen {
            exp_seen = true;
            if i + 1 < bytes.len() && (bytes[i + 1] == b'+' || bytes[i + 1] == b'-') {
                i += 1;
            }
        } else {
            return false;
        }
        i += 1;
    }

    true
}
