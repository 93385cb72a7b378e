//! Tests de propriétés : génération déterministe d’expressions bien formées.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants : re-tokenisation identique, aucune erreur hors division par zéro,
//!   résultat identique à une évaluation de référence en deux passes

use std::time::{Duration, Instant};

use super::erreur::EvalError;
use super::eval::{evaluate, evaluate_tokens};
use super::jetons::{format_tokens, tokenize, Op, Tok};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    match rng.pick(4) {
        0 => format!("{entier}.{}", rng.pick(100)),
        1 => format!("{}", rng.pick(10)),
        _ => format!("{entier}"),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        4 => "×",
        _ => "÷",
    }
}

/// nombre (op nombre)*, avec espaces optionnels
fn gen_expr(rng: &mut Rng, max_ops: u32) -> String {
    let mut s = gen_nombre(rng);
    for _ in 0..rng.pick(max_ops + 1) {
        if rng.pick(3) == 0 {
            s.push(' ');
        }
        s.push_str(gen_op(rng));
        if rng.pick(3) == 0 {
            s.push(' ');
        }
        s.push_str(&gen_nombre(rng));
    }
    s
}

/// Référence indépendante : passe 1 = * et / sur des termes, passe 2 = + et -.
fn reference(jetons: &[Tok]) -> Result<f64, EvalError> {
    let mut termes: Vec<(Op, f64)> = Vec::new();
    let mut courant: Option<f64> = None;
    let mut signe = Op::Plus;
    let mut op_mul: Option<Op> = None;

    for t in jetons {
        match *t {
            Tok::Num(v) => {
                courant = Some(match (courant, op_mul.take()) {
                    (Some(c), Some(op)) => op.appliquer(c, v)?,
                    _ => v,
                });
            }
            Tok::Op(op) if op.precedence() == 2 => op_mul = Some(op),
            Tok::Op(op) => {
                termes.push((signe, courant.take().ok_or(EvalError::StackUnderflow)?));
                signe = op;
            }
        }
    }
    termes.push((signe, courant.ok_or(EvalError::StackUnderflow)?));

    let mut acc = 0.0;
    for (op, v) in termes {
        acc = op.appliquer(acc, v)?;
    }
    Ok(acc)
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_retokenisation_identique() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..2000 {
        budget(start, Duration::from_secs(5));
        let s = gen_expr(&mut rng, 6);

        let t1 = tokenize(&s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        let t2 = tokenize(&s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        assert_eq!(t1, t2, "s={s:?}");

        let compact = format_tokens(&t1);
        let t3 = tokenize(&compact).unwrap_or_else(|e| panic!("compact={compact:?} err={e}"));
        assert_eq!(t1, t3, "s={s:?} compact={compact:?}");

        // alternance nombre / opérateur / ... / nombre
        for (i, t) in t1.iter().enumerate() {
            assert_eq!(matches!(t, Tok::Num(_)), i % 2 == 0, "s={s:?}");
        }
        assert_eq!(t1.len() % 2, 1, "s={s:?}");
    }
}

#[test]
fn prop_expressions_bien_formees() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..2000 {
        budget(start, Duration::from_secs(5));
        let s = gen_expr(&mut rng, 8);

        match evaluate(&s) {
            Ok(v) => {
                let attendu = reference(&tokenize(&s).unwrap()).unwrap();
                assert!(
                    v == attendu || (v.is_nan() && attendu.is_nan()),
                    "s={s:?} v={v} attendu={attendu}"
                );
            }
            Err(EvalError::DivisionByZero) => {
                assert_eq!(
                    reference(&tokenize(&s).unwrap()),
                    Err(EvalError::DivisionByZero),
                    "s={s:?}"
                );
            }
            Err(e) => panic!("s={s:?} erreur inattendue: {e}"),
        }
    }
}

#[test]
fn prop_operateur_orphelin_toujours_refuse() {
    let start = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..500 {
        budget(start, Duration::from_secs(5));
        let s = gen_expr(&mut rng, 4);
        let op = gen_op(&mut rng);

        for malforme in [format!("{op}{s}"), format!("{s}{op}")] {
            let jetons = tokenize(&malforme).unwrap();
            assert_eq!(
                evaluate_tokens(&jetons),
                Err(EvalError::StackUnderflow),
                "malforme={malforme:?}"
            );
        }
    }
}

#[test]
fn prop_division_orpheline_apres_zero() {
    let start = Instant::now();
    let mut rng = Rng::new(0x2B0);

    for _ in 0..500 {
        budget(start, Duration::from_secs(5));
        let base = gen_expr(&mut rng, 4);
        let signe = if rng.pick(2) == 0 { "+" } else { "-" };
        let division = if rng.pick(2) == 0 { "/" } else { "÷" };

        // la base se termine toujours par "±0" : appliquer le "/" final donnerait une division par zéro
        let malforme = format!("{base}{signe}0{division}");
        assert_eq!(
            evaluate(&malforme),
            Err(EvalError::StackUnderflow),
            "malforme={malforme:?}"
        );
    }
}
