use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::session::VisitorSession,
    render::{render, Page, TemplateData},
};

pub async fn home(session: Session, request: Request) -> Result<Response, AppError> {
    let remote_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    VisitorSession::new(&session)
        .set_remote_ip(remote_ip)
        .await?;

    show(&session, Page::Home).await
}

pub async fn about(session: Session) -> Result<Response, AppError> {
    show(&session, Page::About).await
}

pub async fn generals_quarters(session: Session) -> Result<Response, AppError> {
    show(&session, Page::GeneralsQuarters).await
}

pub async fn majors_suite(session: Session) -> Result<Response, AppError> {
    show(&session, Page::MajorsSuite).await
}

pub async fn contact(session: Session) -> Result<Response, AppError> {
    show(&session, Page::Contact).await
}

async fn show(session: &Session, page: Page) -> Result<Response, AppError> {
    Ok(render(session, TemplateData::default(), page)
        .await?
        .into_response())
}
