use axum::response::Html;

use auth_flow_axum::AUTH_ROUTE_PREFIX;

pub(crate) async fn index() -> Html<String> {
    let prefix = AUTH_ROUTE_PREFIX.as_str();
    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <body>
    <h1>demo-auth</h1>
    <ul>
      <li><a href="{prefix}/demo">Sign in with the demo provider</a></li>
      <li><a href="{prefix}/demo/callback?code=demo-code&next=/&includeToken=true">Sign in and come back with the token</a></li>
      <li><a href="{prefix}/logout">Log out</a></li>
    </ul>
  </body>
</html>"#
    ))
}
