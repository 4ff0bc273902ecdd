// tests/loader.rs
//
// Record parsing, rating policy, course deduplication, failure modes.
//
use std::io::Write;

use docente::catalog::{Catalog, parse_rating};

const TWO_SECTIONS_ONE_COURSE: &str = r#"[
  {"clave":"MAT101","asignatura":"Matemática Básica","profesor":"Juan Garcia",
   "horario":"LUN 08:00-10:00","provincia":"Santo Domingo","nrc":"10001",
   "modalidad":"Presencial","calificacion":"7/10"},
  {"clave":"MAT101","asignatura":"Matemática Básica","profesor":"María García",
   "horario":"MAR 10:00-12:00","provincia":"Santiago","nrc":"10002",
   "modalidad":"Virtual","calificacion":"N/A"}
]"#;

#[test]
fn rating_policy() {
    assert_eq!(parse_rating("N/A"), 0);
    assert_eq!(parse_rating("n/a"), 0);
    assert_eq!(parse_rating("7/10"), 7);
    assert_eq!(parse_rating("10/10"), 10);
    assert_eq!(parse_rating(" 3/10 "), 3);
    // malformed numerator never escapes as an error
    assert_eq!(parse_rating("x/10"), 0);
    assert_eq!(parse_rating(""), 0);
    assert_eq!(parse_rating("-4/10"), 0);
}

#[test]
fn duplicate_clave_yields_one_course_two_sections() {
    let cat = Catalog::from_json(TWO_SECTIONS_ONE_COURSE).unwrap();

    assert_eq!(cat.courses().len(), 1);
    assert_eq!(cat.sections().len(), 2);

    let course = &cat.courses()[0];
    assert_eq!(course.code, "MAT101");
    assert_eq!(course.id, "MAT101");
    assert_eq!(course.name, "Matemática Básica");

    assert!(cat.sections().iter().all(|s| s.course_id == "MAT101"));
    let nrcs: Vec<&str> = cat.sections().iter().map(|s| s.nrc.as_str()).collect();
    assert_eq!(nrcs, vec!["10001", "10002"]);
}

#[test]
fn first_record_defines_the_course() {
    let json = r#"[
      {"clave":"LET011","asignatura":"Lengua Española I","profesor":"A",
       "horario":"h","provincia":"Santo Domingo","nrc":"1","modalidad":"m","calificacion":"N/A"},
      {"clave":"LET011","asignatura":"Lengua Española (renombrada)","profesor":"B",
       "horario":"h","provincia":"Santiago","nrc":"2","modalidad":"m","calificacion":"N/A"}
    ]"#;
    let cat = Catalog::from_json(json).unwrap();
    assert_eq!(cat.courses()[0].name, "Lengua Española I");
}

#[test]
fn sections_carry_parsed_fields() {
    let cat = Catalog::from_json(TWO_SECTIONS_ONE_COURSE).unwrap();
    let first = &cat.sections()[0];
    assert_eq!(first.id, first.nrc);
    assert_eq!(first.professor, "Juan Garcia");
    assert_eq!(first.campus, "Santo Domingo");
    assert_eq!(first.modality, "Presencial");
    assert_eq!(first.rating, 7);
    assert_eq!(cat.sections()[1].rating, 0);
}

#[test]
fn every_section_resolves_its_course() {
    let cat = Catalog::from_json(TWO_SECTIONS_ONE_COURSE).unwrap();
    for sec in cat.sections() {
        assert!(cat.course_by_code(&sec.course_id).is_some());
    }
}

#[test]
fn malformed_json_is_an_error_not_a_panic() {
    assert!(Catalog::from_json("not json at all").is_err());
    assert!(Catalog::from_json(r#"{"clave":"X"}"#).is_err()); // object, not array
}

#[test]
fn empty_array_is_a_valid_empty_catalog() {
    let cat = Catalog::from_json("[]").unwrap();
    assert!(cat.courses().is_empty());
    assert!(cat.sections().is_empty());
}

#[test]
fn load_file_roundtrip_and_missing_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(TWO_SECTIONS_ONE_COURSE.as_bytes()).unwrap();

    let cat = Catalog::load_file(tmp.path()).unwrap();
    assert_eq!(cat.sections().len(), 2);

    assert!(Catalog::load_file(std::path::Path::new("no/such/file.json")).is_err());
}
