mod common;

use common::{call, file, ident, ident_expr, import_decl, int_lit};
use facts_go::{BuiltinOperation, FactRecorder, FactStore};
use rayon::prelude::*;
use syntax_go::ast::expr::Expr;
use types_go::{universe, BasicKind, ConstantValue, Module, Type};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn store_is_send_and_sync() {
  assert_send_sync::<FactStore>();
}

#[test]
fn concurrent_readers_see_the_same_facts() {
  let module = Module::builder("example.com/app", "app")
    .import(common::leaf_module("fmt"))
    .import(common::leaf_module("os"))
    .build();
  let mut recorder = FactRecorder::new(module);

  let ints = Type::slice(Type::basic(BasicKind::Int));
  let mut calls: Vec<Expr> = Vec::new();
  let mut literals: Vec<Expr> = Vec::new();
  for i in 0..256i64 {
    let lit = int_lit(&i.to_string());
    recorder.record_type(&lit, Type::basic(BasicKind::Int));
    recorder.record_constant(&lit, ConstantValue::from(i));
    literals.push(lit);

    let s = ident_expr("s");
    recorder.record_type(&s, ints.clone());
    let callee = ident("append");
    recorder.record_binding(&callee, universe::lookup("append").unwrap().clone());
    let append: Expr = call(callee.into(), vec![s, int_lit("0")], false).into();
    recorder.record_type(&append, ints.clone());
    calls.push(append);
  }
  let store = recorder.finish(vec![
    file("app", vec![import_decl(&["fmt"])]),
    file("app", vec![import_decl(&["os", "fmt"])]),
  ]);

  let constants: Vec<i64> = literals
    .par_iter()
    .map(|lit| {
      let value = store.constant_value_of(lit).unwrap();
      i64::try_from(value.as_int().unwrap()).unwrap()
    })
    .collect();
  assert_eq!(constants, (0..256).collect::<Vec<_>>());

  let signatures: Vec<String> = calls
    .par_iter()
    .map(|call| {
      let call = call.as_call().unwrap();
      assert_eq!(store.builtin_of(call), Some(BuiltinOperation::Append));
      store.builtin_call_signature(call).unwrap().to_string()
    })
    .collect();
  assert!(signatures.iter().all(|sig| sig == "func([]int, ...int)"));

  let imports: Vec<Vec<String>> = (0..64)
    .into_par_iter()
    .map(|_| {
      store
        .imports()
        .unwrap()
        .iter()
        .map(|m| m.path().to_string())
        .collect()
    })
    .collect();
  assert!(imports.iter().all(|paths| paths == &["fmt", "os"]));
}
