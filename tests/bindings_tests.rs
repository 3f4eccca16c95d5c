use cutexpr::{
    Bindings, Error, EvalError, Evaluator, Expression, MissingVariable, Value, eval_str,
};
use foldhash::{HashMap, HashMapExt};
use std::collections::BTreeMap;

#[test]
fn foldhash_string_map() {
    let mut vars: HashMap<String, f64> = HashMap::new();
    vars.insert("power".to_string(), 100.0);
    vars.insert("defense".to_string(), 40.0);
    let out = eval_str("power - defense * 2", &vars).unwrap();
    assert_eq!(out, Value::Number(20.0));
}

#[test]
fn std_map_with_str_keys() {
    let mut vars = std::collections::HashMap::new();
    vars.insert("a", 1.0);
    vars.insert("b", 2.0);
    assert_eq!(eval_str("a < b", &vars).unwrap(), Value::Boolean(true));
}

#[test]
fn btree_maps() {
    let mut owned = BTreeMap::new();
    owned.insert("x".to_string(), 3.0);
    assert_eq!(eval_str("x * 2", &owned).unwrap(), Value::Number(6.0));

    let mut borrowed = BTreeMap::new();
    borrowed.insert("x", 4.0);
    assert_eq!(eval_str("x * 2", &borrowed).unwrap(), Value::Number(8.0));
}

#[test]
fn slices_and_arrays() {
    let array = [("a", 1.0), ("b", 5.0)];
    assert_eq!(eval_str("a + b", &array).unwrap(), Value::Number(6.0));

    let slice: &[(&str, f64)] = &array;
    assert_eq!(eval_str("b - a", slice).unwrap(), Value::Number(4.0));

    // later pairs shadow earlier ones
    let shadowed = [("a", 1.0), ("a", 7.0)];
    assert_eq!(shadowed.lookup("a"), Some(7.0));
}

#[test]
fn references_to_bindings() {
    let array = [("a", 2.0)];
    let by_ref = &array;
    assert_eq!(eval_str("a + a", &by_ref).unwrap(), Value::Number(4.0));
}

struct Event {
    energy: f64,
    sigma: f64,
}

impl Bindings for Event {
    fn lookup(&self, name: &str) -> Option<f64> {
        match name {
            "energy" => Some(self.energy),
            "sigma" => Some(self.sigma),
            _ => None,
        }
    }
}

#[test]
fn custom_bindings() {
    let cut = Expression::parse("energy > 5100 && sigma < 0.5").unwrap();
    let events = [
        Event { energy: 6000.0, sigma: 0.2 },
        Event { energy: 6000.0, sigma: 0.7 },
        Event { energy: 4000.0, sigma: 0.1 },
    ];
    let selected: Vec<bool> = events
        .iter()
        .map(|e| cut.eval(e).unwrap() == Value::Boolean(true))
        .collect();
    assert_eq!(selected, vec![true, false, false]);
}

#[test]
fn missing_variable_fails_by_default() {
    let expr = Expression::parse("x + 1").unwrap();
    let vars: HashMap<String, f64> = HashMap::new();
    assert_eq!(
        expr.eval(&vars).unwrap_err(),
        EvalError::UndefinedVariable("x".into())
    );
    assert_eq!(Evaluator::default().missing(), MissingVariable::Fail);
}

#[test]
fn missing_variable_substitution() {
    let expr = Expression::parse("x + 1").unwrap();
    let vars: HashMap<String, f64> = HashMap::new();
    let zero = Evaluator::with_missing(MissingVariable::Substitute(0.0));
    assert_eq!(expr.eval_with(&zero, &vars).unwrap(), Value::Number(1.0));
    let ten = Evaluator::with_missing(MissingVariable::Substitute(10.0));
    assert_eq!(expr.eval_with(&ten, &vars).unwrap(), Value::Number(11.0));
}

#[test]
fn bound_values_take_priority_over_substitution() {
    let zero = Evaluator::with_missing(MissingVariable::Substitute(0.0));
    let expr = Expression::parse("x + y").unwrap();
    assert_eq!(expr.eval_with(&zero, &[("x", 2.0)]).unwrap(), Value::Number(2.0));
}

#[test]
fn eval_str_reports_unbound() {
    let err = eval_str("missing", &[("present", 1.0)]).unwrap_err();
    assert_eq!(err, Error::Eval(EvalError::UndefinedVariable("missing".into())));
}
