mod helpers;
mod mocks;
mod notifications;
mod orders;

mod misc {
    use actix_web::{body::MessageBody, test, test::TestRequest, App};

    use crate::routes::health;

    #[actix_web::test]
    async fn health_check() {
        let app = App::new().service(health);
        let service = test::init_service(app).await;
        let req = TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&service, req).await;
        assert!(res.status().is_success());
        let body = res.into_body().try_into_bytes().unwrap();
        assert_eq!(body, "👍️\n");
    }
}
