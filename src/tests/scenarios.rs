//! The ten concrete end-to-end scenarios the protocol is acceptance-tested
//! against, each driven through [`Calculator`] exactly as the stdin driver
//! would feed it line by line.

use crate::{CalcError, Calculator};

fn run(lines: &[&str]) -> Vec<Result<Option<String>, CalcError>> {
    let mut calc = Calculator::new();
    lines
        .iter()
        .map(|line| {
            let result = calc.execute(line);
            calc.shrink_stack();
            result
        })
        .collect()
}

#[test]
fn scenario_one_deg_and_print() {
    let results = run(&["(1,2)+(2,3)", "DEG", "PRINT"]);
    assert_eq!(results[0], Ok(None));
    assert_eq!(results[1], Ok(Some("3".to_owned())));
    assert_eq!(results[2], Ok(Some("(1,2)+(2,3)".to_owned())));
}

#[test]
fn scenario_two_clone_add_print() {
    let results = run(&["(1,0)+(1,2)", "CLONE", "ADD", "PRINT"]);
    assert_eq!(results[3], Ok(Some("(2,0)+(2,2)".to_owned())));
}

#[test]
fn scenario_three_sub_pop_order() {
    // stack ends [5, 3]; SUB pops p1=3 then p2=5, computing p1 - p2 = -2.
    let results = run(&["5", "3", "SUB", "PRINT"]);
    assert_eq!(results[3], Ok(Some("-2".to_owned())));
}

#[test]
fn scenario_four_at() {
    let results = run(&["(1,2)", "AT 2", "PRINT"]);
    assert_eq!(results[2], Ok(Some("4".to_owned())));
}

#[test]
fn scenario_five_add_on_empty_stack_underflows() {
    let results = run(&["ADD"]);
    assert_eq!(results[0], Err(CalcError::StackUnderflow));
}

#[test]
fn scenario_six_deg_by_nested() {
    let results = run(&["((1,1),2)", "DEG_BY 0", "DEG_BY 1"]);
    assert_eq!(results[1], Ok(Some("2".to_owned())));
    assert_eq!(results[2], Ok(Some("1".to_owned())));
}

#[test]
fn scenario_seven_comments_and_blank_lines_are_ignored() {
    let results = run(&["# comment", "", "ZERO", "IS_ZERO"]);
    assert_eq!(results[0], Ok(None));
    assert_eq!(results[1], Ok(None));
    assert_eq!(results[2], Ok(None));
    assert_eq!(results[3], Ok(Some("1".to_owned())));
}

#[test]
fn scenario_eight_unknown_command() {
    let results = run(&["FOO"]);
    assert_eq!(results[0], Err(CalcError::WrongCommand));
}

#[test]
fn scenario_nine_negative_exponent_is_wrong_poly() {
    let results = run(&["(1,-1)"]);
    assert_eq!(results[0], Err(CalcError::WrongPoly));
}

#[test]
fn scenario_ten_compose_parameter_out_of_range() {
    let results = run(&["COMPOSE 18446744073709551616"]);
    assert_eq!(results[0], Err(CalcError::ComposeWrongParameter));
}
