//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - valeur attendue calculée pendant la génération, dans le même ordre
//!   d’opérations IEEE-754 : l’égalité doit être exacte
//! - invariant clé : Ok(v) => v fini ; inf => InfiniteResult ; NaN => NotANumber

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::evaluate;

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
        // LCG simple (déterministe)
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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const OPS: [&str; 4] = ["+", "-", "*", "/"];

fn appliquer(op: &str, a: f64, b: f64) -> f64 {
    match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        _ => a / b,
    }
}

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // 0 inclus : la division par zéro doit arriver de temps en temps
    let n = rng.pick(10) as i32 - 2;
    if rng.pick(4) == 0 {
        let x = f64::from(n) + 0.5;
        (format!("{x}"), x)
    } else {
        (format!("{n}"), f64::from(n))
    }
}

/// Expression entièrement parenthésée + sa valeur.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }
    let (ga, va) = gen_expr(rng, depth - 1);
    let (gb, vb) = gen_expr(rng, depth - 1);
    let op = OPS[rng.pick(4) as usize];
    (format!("( {ga} {op} {gb} )"), appliquer(op, va, vb))
}

/// Chaîne plate "a op b op c ..." + sa valeur par précédence classique :
/// termes multiplicatifs de gauche à droite, puis somme de gauche à droite.
fn gen_chaine(rng: &mut Rng, n: usize) -> (String, f64) {
    let (t0, v0) = gen_nombre(rng);
    let mut texte = t0;

    // somme des termes déjà clos (None : le premier terme démarre tel quel)
    let mut total: Option<f64> = None;
    let mut op_additif = "+";
    let mut terme = v0;

    for _ in 0..n {
        let op = OPS[rng.pick(4) as usize];
        let (t, v) = gen_nombre(rng);
        texte.push_str(&format!(" {op} {t}"));
        match op {
            "*" | "/" => terme = appliquer(op, terme, v),
            _ => {
                total = Some(match total {
                    None => terme,
                    Some(s) => appliquer(op_additif, s, terme),
                });
                op_additif = op;
                terme = v;
            }
        }
    }

    let valeur = match total {
        None => terme,
        Some(s) => appliquer(op_additif, s, terme),
    };
    (texte, valeur)
}

fn verifier(expr: &str, attendu: f64) {
    match evaluate(expr) {
        Ok(v) => {
            assert!(attendu.is_finite(), "expr={expr:?} attendu={attendu} mais Ok({v})");
            assert_eq!(v.to_bits(), attendu.to_bits(), "expr={expr:?} v={v} attendu={attendu}");
        }
        Err(ErreurCalc::InfiniteResult) => {
            assert!(attendu.is_infinite(), "expr={expr:?} attendu={attendu}");
        }
        Err(ErreurCalc::NotANumber) => {
            assert!(attendu.is_nan(), "expr={expr:?} attendu={attendu}");
        }
        Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_parenthese_contre_calcul_direct() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_non_fini = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        verifier(&expr, attendu);

        if attendu.is_finite() {
            seen_ok += 1;
        } else {
            seen_non_fini += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_non_fini > 0, "aucun inf/NaN vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_chaine_plate_precedence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for i in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_chaine(&mut rng, 1 + i % 8);
        verifier(&expr, attendu);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let (ea, _) = gen_expr(&mut a, 4);
        let (eb, _) = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(evaluate(&ea), evaluate(&eb));
    }
}

#[test]
fn fuzz_safe_jetons_aleatoires_jamais_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let pool = ["1", "-2", "3.5", "+", "-", "*", "/", "sqrt", "(", ")", "x", "0"];
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let n = 1 + rng.pick(12) as usize;
        let expr: Vec<&str> = (0..n).map(|_| pool[rng.pick(pool.len() as u32) as usize]).collect();
        let expr = expr.join(" ");

        // Toute sortie est acceptable, sauf une valeur non finie ou une panique.
        if let Ok(v) = evaluate(&expr) {
            assert!(v.is_finite(), "expr={expr:?} v={v}");
        }
    }
}

/* ------------------------ Anti pile ------------------------ */

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let n = 2000;
    let mut expr = String::new();
    for _ in 0..n {
        expr.push_str("( ");
    }
    expr.push('1');
    for _ in 0..n {
        expr.push_str(" + 1 )");
    }

    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(v, (n + 1) as f64);
}

#[test]
fn fuzz_safe_longue_chaine() {
    let expr = vec!["0.5"; 10_000].join(" + ");
    assert_eq!(evaluate(&expr), Ok(5000.0));
}
