mod common;
use common::*;

#[test]
fn test_if_jumps_when_true() {
    let program = "x = 1;\nif x < 3 goto skip;\nprint x;\nskip: end;";
    assert_eq!(run(program), "");
}

#[test]
fn test_if_falls_through_when_false() {
    let program = "x = 5;\nif x < 3 goto skip;\nprint x;\nskip: end;";
    assert_eq!(run(program), "5\n");
}

#[test]
fn test_double_not_never_jumps() {
    let program = "x = 1;\nif !!0 goto skip;\nprint x;\nskip: end;";
    assert_eq!(run(program), "1\n");
}

#[test]
fn test_single_not_always_jumps() {
    let program = "x = 1;\nif !0 goto skip;\nprint x;\nskip: end;";
    assert_eq!(run(program), "");
}

#[test]
fn test_not_on_variable() {
    let program = "a = 0;\nif !a goto yes;\nstop;\nyes: print \"yes\";\nend;";
    assert_eq!(run(program), "yes\n");
}

#[test]
fn test_not_equal_is_not_negation() {
    let program = "a = 2;\nif a != 1 goto yes;\nstop;\nyes: print \"yes\";\nend;";
    assert_eq!(run(program), "yes\n");
}

#[test]
fn test_condition_with_parentheses() {
    let program = "if (1 + 1) * 2 == 4 goto yes;\nstop;\nyes: print \"yes\";\nend;";
    assert_eq!(run(program), "yes\n");
}

#[test]
fn test_countdown() {
    let program = "n = 3;\ntop: print n;\nn--;\nif n > 0 goto top;\nend;";
    assert_eq!(run(program), "3\n2\n1\n");
}

#[test]
fn test_undefined_label_even_when_false() {
    assert_eq!(
        run("if 0 goto nowhere;\nend;"),
        "UNDEFINED LABEL IN LINE 1; nowhere\n"
    );
}

#[test]
fn test_missing_goto() {
    assert_eq!(
        run("x = 0;\nif x < 1;\nend;"),
        "MALFORMED STATEMENT IN LINE 2; if x < 1;\n"
    );
}

#[test]
fn test_trailing_label_is_out_of_range() {
    assert_eq!(
        run("goto done;\ndone:"),
        "STATEMENT OUT OF RANGE IN LINE 1; STATEMENT 1\n"
    );
}
