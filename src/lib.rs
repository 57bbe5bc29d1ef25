use seed::{prelude::*, *};

pub mod credit;
pub mod error;
pub mod grade;
pub mod ledger;
pub mod session;
mod util;

use credit::CreditWeight;
use error::LedgerError;
use grade::Grade;
use ledger::{Cgpa, Subject};
use session::Session;

const MOUNT_POINT: &str = "app";

// ------ ------
//     Model
// ------ ------

#[derive(Default)]
pub struct Model {
    session: Session,
    alert: Option<LedgerError>,
}

impl Model {
    /// Runs one message against the session. A failed message changes nothing.
    pub fn apply(&mut self, msg: Msg) -> Result<(), LedgerError> {
        let session = &mut self.session;
        match msg {
            Msg::CreditWeightChanged(value) => {
                let weight = CreditWeight::parse_selection(&value)?;
                session.select_credit_weight(weight);
            }
            Msg::AddMoreSubjects => {
                session.select_credit_weight(None);
            }

            Msg::AddSubject => {
                session.add_subject()?;
            }
            Msg::GradeChanged(index, value) => {
                let grade = Grade::parse_selection(&value)?;
                session.set_grade(index, grade)?;
            }
            Msg::DeleteSubject(index) => {
                session.delete_subject(index)?;
            }

            Msg::Submit => session.submit()?,
            Msg::CalculateCgpa => {
                session.calculate_cgpa();
            }

            Msg::DismissAlert => (),
        }
        Ok(())
    }
}

// ------ ------
//     Init
// ------ ------

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
    Model::default()
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone)]
pub enum Msg {
    CreditWeightChanged(String),
    AddMoreSubjects,

    AddSubject,
    GradeChanged(usize, String),
    DeleteSubject(usize),

    Submit,
    CalculateCgpa,

    DismissAlert,
}

fn update(msg: Msg, model: &mut Model, _: &mut impl Orders<Msg>) {
    if cfg!(debug_assertions) {
        log!("update", msg);
    }

    match model.apply(msg) {
        Ok(()) => model.alert = None,
        Err(err) => {
            error!(err.to_string());
            model.alert = Some(err);
        }
    }

    if cfg!(debug_assertions) {
        match serde_json::to_string(&model.session) {
            Ok(snapshot) => log!(snapshot),
            Err(err) => error!(format!("cannot serialize session: {}", err)),
        }
    }
}

// ------ ------
//     View
// ------ ------

pub fn view(model: &Model) -> Node<Msg> {
    let session = &model.session;
    div![
        C!["calculator"],
        h1!["CGPA Calculator"],
        view_alert(model.alert.as_ref()),
        view_credit_picker(session.selected()),
        match session.selected() {
            Some(weight) if !session.is_submitted() => view_subjects(weight, session.subjects()),
            _ => empty![],
        },
        IF!(session.is_submitted() => view_submitted()),
        session.cgpa().map(view_cgpa),
    ]
}

// ------ alert ------

fn view_alert(alert: Option<&LedgerError>) -> Node<Msg> {
    match alert {
        Some(err) => div![
            C!["alert"],
            span![err.user_message()],
            button![
                C!["dismiss"],
                ev(Ev::Click, |_| Msg::DismissAlert),
                "×"
            ],
        ],
        None => empty![],
    }
}

// ------ credit picker ------

fn view_credit_picker(selected: Option<CreditWeight>) -> Node<Msg> {
    div![
        C!["credit-picker"],
        label!["Select Credit Type:"],
        select![
            option![
                attrs! {
                    At::Value => "";
                    At::Selected => selected.is_none().as_at_value();
                },
                "Select Credit"
            ],
            CreditWeight::ALL.iter().map(|weight| {
                option![
                    attrs! {
                        At::Value => weight.to_string();
                        At::Selected => (selected == Some(*weight)).as_at_value();
                    },
                    format!("{}-Credit", weight)
                ]
            }),
            input_ev(Ev::Change, Msg::CreditWeightChanged),
        ]
    ]
}

// ------ subjects ------

fn view_subjects(weight: CreditWeight, subjects: &[Subject]) -> Node<Msg> {
    section![
        C!["subjects"],
        h2![format!("{}-Credit Subjects", weight)],
        subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| view_subject(index, subject)),
        button![
            C!["add-subject"],
            ev(Ev::Click, |_| Msg::AddSubject),
            format!("Add {}-Credit Subject", weight)
        ],
        button![
            C!["submit"],
            ev(Ev::Click, |_| Msg::Submit),
            format!("Submit {}-Credit Subjects", weight)
        ],
    ]
}

fn view_subject(index: usize, subject: &Subject) -> Node<Msg> {
    div![
        C!["subject"],
        label!["Grade:"],
        select![
            option![
                attrs! {
                    At::Value => "";
                    At::Selected => subject.grade.is_none().as_at_value();
                },
                "Select Grade"
            ],
            Grade::ALL.iter().map(|grade| {
                option![
                    attrs! {
                        At::Value => grade.label();
                        At::Selected => (subject.grade == Some(*grade)).as_at_value();
                    },
                    grade.label()
                ]
            }),
            input_ev(Ev::Change, move |value| Msg::GradeChanged(index, value)),
        ],
        button![
            C!["destroy"],
            ev(Ev::Click, move |_| Msg::DeleteSubject(index)),
            "Delete"
        ]
    ]
}

// ------ after submit ------

fn view_submitted() -> Node<Msg> {
    div![
        C!["submitted"],
        h3!["Choose the credit option to add more subjects!"],
        button![ev(Ev::Click, |_| Msg::AddMoreSubjects), "Add More Subjects"],
        button![ev(Ev::Click, |_| Msg::CalculateCgpa), "Calculate CGPA"],
    ]
}

// ------ cgpa ------

fn view_cgpa(cgpa: Cgpa) -> Node<Msg> {
    h3![C!["cgpa"], format!("Your CGPA is: {}", cgpa)]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    App::start(MOUNT_POINT, init, update, view);
}
