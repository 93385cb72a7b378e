// src/noyau/jetons.rs

use num_traits::Zero;

use super::erreur::EvalError;

/// Les quatre opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    /// Reconnaît un opérateur (après normalisation × → *, ÷ → /).
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }

    /// `*` et `/` lient plus fort que `+` et `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
        }
    }

    /// Applique l’opérateur à (gauche, droite).
    pub fn appliquer(self, gauche: f64, droite: f64) -> Result<f64, EvalError> {
        match self {
            Op::Plus => Ok(gauche + droite),
            Op::Minus => Ok(gauche - droite),
            Op::Star => Ok(gauche * droite),
            Op::Slash => {
                if droite.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(gauche / droite)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
}

fn normalise_synonyme(c: char) -> char {
    match c {
        '×' => '*',
        '÷' => '/',
        _ => c,
    }
}

fn est_accepte(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || Op::depuis_char(c).is_some()
}

/// Tokenize une chaîne en jetons.
/// - espaces ignorés (partout, y compris au milieu d’un nombre)
/// - × et ÷ acceptés comme synonymes de * et /
/// - chaque opérateur est un jeton ; chaque suite maximale de chiffres/points est un nombre
///
/// NOTE: pas de moins unaire. "-2" donne [Op(Minus), Num(2)] et c’est l’évaluateur
/// qui refuse.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(normalise_synonyme)
        .collect();

    if let Some((pos, c)) = chars.iter().enumerate().find(|(_, c)| !est_accepte(**c)) {
        return Err(EvalError::MalformedExpression(format!(
            "caractère inattendu '{c}' (position {pos})"
        )));
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        if let Some(op) = Op::depuis_char(chars[i]) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && Op::depuis_char(chars[i]).is_none() {
            i += 1;
        }
        let texte: String = chars[start..i].iter().collect();
        // une suite de chiffres trop longue déborde en inf : refusée comme nombre
        let v = match texte.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err(EvalError::NumberFormat(texte)),
        };
        out.push(Tok::Num(v));
    }

    Ok(out)
}

/// Liste de jetons en texte compact (trace de débogage).
///
/// Le texte produit se re-tokenize en la même suite de jetons.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = String::new();
    for t in tokens {
        match t {
            Tok::Num(v) => out.push_str(&v.to_string()),
            Tok::Op(op) => out.push(op.symbole()),
        }
    }
    out
}
