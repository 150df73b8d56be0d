//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : l’arbre réaffiché (parenthésé) se relit en un arbre identique

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval_expression;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // 0 inclus : la division par zéro doit pouvoir arriver
    let n = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{n}.5"),
        1 => format!(".{n}"),
        _ => format!("{n}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let op = match rng.pick(5) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        _ => "^",
    };

    match rng.pick(4) {
        0 => gen_nombre(rng),
        1 => format!(
            "({}{op}{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        _ => {
            let sep = if rng.coin() { " " } else { "" };
            format!(
                "{}{sep}{op}{sep}{}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 'x', '%',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_relecture() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let r1 = eval_expression(&expr);
        let r2 = eval_expression(&expr);

        match (&r1, &r2) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.arbre, b.arbre, "expr={expr:?}");
                assert_eq!(a.valeur.to_bits(), b.valeur.to_bits(), "expr={expr:?}");

                let relu = eval_expression(&a.arbre.to_string())
                    .unwrap_or_else(|e| panic!("relecture: expr={expr:?} err={e}"));
                assert_eq!(relu.arbre, a.arbre, "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert_eq!(a, b, "expr={expr:?}");
                // seule erreur possible sur une expression bien formée
                assert_eq!(*a, ErreurCalcul::DivisionParZero, "expr={expr:?}");
                seen_err += 1;
            }
            _ => panic!("non déterministe: expr={expr:?}"),
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let len = rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, len);

        // Erreur ou valeur : jamais de panique, toujours le même verdict.
        let r1 = eval_expression(&expr).map(|c| c.valeur.to_bits());
        let r2 = eval_expression(&expr).map(|c| c.valeur.to_bits());
        assert_eq!(r1, r2, "expr={expr:?}");

        if let Err(ErreurCalcul::CaractereInvalide(c)) = r1 {
            assert!(c == 'x' || c == '%', "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    let c = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(c.valeur, 400.0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let n = 200;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_expression(&expr).map(|c| c.valeur), Ok(7.0));

    let ouvert = format!("{}7{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(
        eval_expression(&ouvert).map(|c| c.valeur),
        Err(ErreurCalcul::ParenthesesDesequilibrees)
    );
}
