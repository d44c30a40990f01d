use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn ping_redis(pool: &Pool) -> &'static str {
    let Ok(mut conn) = pool.get().await else {
        return "unhealthy";
    };
    match deadpool_redis::redis::cmd("PING")
        .query_async::<String>(&mut conn)
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    }
}

/// READINESS PROBE
/// - Database answers `SELECT 1`
/// - Session store answers `PING`
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let redis_status = ping_redis(&redis).await;

    let body = |status| ReadinessResponse {
        status,
        database: db_status,
        redis: redis_status,
    };

    if db_status == "ok" && redis_status == "ok" {
        HttpResponse::Ok().json(body("ok"))
    } else {
        tracing::warn!(database = db_status, redis = redis_status, "Readiness check failed");
        HttpResponse::ServiceUnavailable().json(body("unhealthy"))
    }
}
