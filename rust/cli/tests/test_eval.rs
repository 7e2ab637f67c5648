use maskcard_cli::run;

fn eval(cards: &[&str]) -> (i32, String, String) {
    let mut args = vec!["maskcard", "eval"];
    args.extend_from_slice(cards);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn eval_picks_best_of_seven() {
    let (code, out, _) = eval(&["Kh", "Kd", "Ks", "2c", "2h", "9s", "Ah"]);
    assert_eq!(code, 0);
    assert!(out.contains("Best: Full House"), "out={}", out);
}

#[test]
fn eval_has_no_wheel() {
    let (code, out, _) = eval(&["Ah", "2d", "3s", "4c", "5h"]);
    assert_eq!(code, 0);
    assert!(out.contains("Best: High Card"), "out={}", out);
}

#[test]
fn eval_requires_cards() {
    let (code, _, _) = eval(&[]);
    assert_eq!(code, 2);
}

#[test]
fn eval_rejects_third_joker() {
    let (code, _, err) = eval(&["JK", "JK", "JK", "As", "Ks"]);
    assert_eq!(code, 2);
    assert!(err.contains("Jokers"));
}
