//! Browser tests for the rendered form. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use cgpa::{view, Model, Msg};
use seed::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn texts(node: &Node<Msg>, out: &mut Vec<String>) {
    match node {
        Node::Element(el) => el.children.iter().for_each(|child| texts(child, out)),
        Node::Text(text) => out.push(text.text.to_string()),
        _ => (),
    }
}

fn rendered(model: &Model) -> Vec<String> {
    let mut out = Vec::new();
    texts(&view(model), &mut out);
    out
}

fn model_after(msgs: Vec<Msg>) -> Model {
    let mut model = Model::default();
    for msg in msgs {
        model.apply(msg).unwrap();
    }
    model
}

#[wasm_bindgen_test]
fn fresh_form_only_shows_the_credit_picker() {
    let text = rendered(&Model::default());
    assert!(text.contains(&"Select Credit Type:".to_string()));
    assert!(text.contains(&"4-Credit".to_string()));
    assert!(!text.iter().any(|t| t.starts_with("Your CGPA is")));
    assert!(!text.iter().any(|t| t.ends_with("Credit Subjects")));
}

#[wasm_bindgen_test]
fn selected_bucket_renders_its_subjects() {
    let model = model_after(vec![
        Msg::CreditWeightChanged("3".into()),
        Msg::AddSubject,
        Msg::AddSubject,
    ]);
    let text = rendered(&model);
    assert!(text.contains(&"3-Credit Subjects".to_string()));
    assert!(text.contains(&"Add 3-Credit Subject".to_string()));
    assert_eq!(text.iter().filter(|t| *t == "Delete").count(), 2);
}

#[wasm_bindgen_test]
fn cgpa_is_shown_until_the_next_mutation() {
    let mut model = model_after(vec![
        Msg::CreditWeightChanged("2".into()),
        Msg::AddSubject,
        Msg::GradeChanged(0, "F".into()),
        Msg::Submit,
        Msg::CalculateCgpa,
    ]);
    let text = rendered(&model);
    assert!(text.contains(&"Your CGPA is: 0.00".to_string()));
    assert!(text.contains(&"Calculate CGPA".to_string()));

    model.apply(Msg::AddMoreSubjects).unwrap();
    model.apply(Msg::CreditWeightChanged("2".into())).unwrap();
    model.apply(Msg::AddSubject).unwrap();
    let text = rendered(&model);
    assert!(!text.iter().any(|t| t.starts_with("Your CGPA is")));
}
