use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use rstest::rstest;
use timetable_api::middleware::auth::{caller_from_parts, Caller, Role};
use timetable_api::middleware::error_handling::AppError;
use timetable_core::errors::{ConflictDetail, ConflictResource, TimetableError};
use uuid::Uuid;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[rstest]
#[case(TimetableError::NotFound("missing".into()), StatusCode::NOT_FOUND)]
#[case(TimetableError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
#[case(TimetableError::Authentication("who".into()), StatusCode::UNAUTHORIZED)]
#[case(TimetableError::Authorization("no".into()), StatusCode::FORBIDDEN)]
#[case(TimetableError::Database(eyre::eyre!("down")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] err: TimetableError, #[case] expected: StatusCode) {
    let response = AppError(err).into_response();
    assert_eq!(response.status(), expected);
}

#[test]
fn test_conflict_maps_to_409() {
    let err = TimetableError::Conflict(ConflictDetail {
        resource: ConflictResource::Room,
        occupied_by: "Math".to_string(),
        start_time: t(9, 0),
        end_time: t(9, 55),
    });

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

fn parts_with_headers(headers: &[(&str, &str)]) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/api/timetable");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(()).unwrap().into_parts().0
}

#[test]
fn test_caller_extraction() {
    let id = Uuid::new_v4();
    let parts = parts_with_headers(&[
        ("x-user-id", &id.to_string()),
        ("x-user-role", "professor"),
    ]);

    let caller = caller_from_parts(&parts).expect("Failed to extract caller");
    assert_eq!(caller.user_id, id);
    assert_eq!(caller.role, Role::Professor);
}

#[test]
fn test_caller_extraction_missing_headers() {
    let parts = parts_with_headers(&[]);
    assert!(matches!(
        caller_from_parts(&parts),
        Err(TimetableError::Authentication(_))
    ));

    let parts = parts_with_headers(&[("x-user-id", "not-a-uuid"), ("x-user-role", "admin")]);
    assert!(matches!(
        caller_from_parts(&parts),
        Err(TimetableError::Authentication(_))
    ));

    let parts = parts_with_headers(&[
        ("x-user-id", &Uuid::new_v4().to_string()),
        ("x-user-role", "superuser"),
    ]);
    assert!(matches!(
        caller_from_parts(&parts),
        Err(TimetableError::Authentication(_))
    ));
}

#[test]
fn test_role_checks() {
    let admin = Caller {
        user_id: Uuid::new_v4(),
        role: Role::Admin,
    };
    let professor = Caller {
        user_id: Uuid::new_v4(),
        role: Role::Professor,
    };
    let student = Caller {
        user_id: Uuid::new_v4(),
        role: Role::Student,
    };

    assert!(admin.require(Role::Admin).is_ok());
    assert!(matches!(
        professor.require(Role::Admin),
        Err(TimetableError::Authorization(_))
    ));

    assert!(admin.require_any(&[Role::Admin, Role::Professor]).is_ok());
    assert!(professor
        .require_any(&[Role::Admin, Role::Professor])
        .is_ok());
    assert!(matches!(
        student.require_any(&[Role::Admin, Role::Professor]),
        Err(TimetableError::Authorization(_))
    ));
}

#[rstest]
#[case("admin", Role::Admin)]
#[case("professor", Role::Professor)]
#[case("student", Role::Student)]
fn test_role_parse(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(raw.parse::<Role>().unwrap(), expected);
    assert_eq!(expected.as_str(), raw);
}
