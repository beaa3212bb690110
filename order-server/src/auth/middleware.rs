//! 认证中间件
//!
//! 为 JWT 认证和角色授权提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::ErrorCode;
use shared::models::Role;

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// 认证中间件 - 要求用户登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT。
/// 验证成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (`/health` 等)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 / 未知角色 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证
    if !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let user = authenticate(state.jwt_service(), token, req.uri())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Validate a bearer token and build the caller context
pub(crate) fn authenticate(
    jwt_service: &JwtService,
    token: &str,
    uri: &http::Uri,
) -> Result<CurrentUser, AppError> {
    match jwt_service.validate_token(token) {
        Ok(claims) => CurrentUser::try_from(claims).map_err(|e| {
            security_log!("WARN", "auth_bad_claims", error = e.clone(), uri = format!("{:?}", uri));
            AppError::invalid_token(format!("Malformed JWT claims: {}", e))
        }),
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", uri)
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// 角色检查中间件 - 要求任一指定角色 (管理员总是通过)
///
/// # 用法
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/chef/pending-orders", get(handler::pending))
///     .layer(middleware::from_fn(require_role(&[Role::Chef])));
/// ```
///
/// # 错误
///
/// 角色不符返回 403 RoleRequired
pub fn require_role(
    roles: &'static [Role],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if !user.has_any_role(roles) {
                let required = roles
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join("|");
                security_log!(
                    "WARN",
                    "role_denied",
                    user_id = user.id.clone(),
                    user_role = user.role.as_str(),
                    required_role = required.clone()
                );
                return Err(AppError::with_message(
                    ErrorCode::RoleRequired,
                    format!("Role required: {}", required),
                ));
            }

            Ok(next.run(req).await)
        })
    }
}
