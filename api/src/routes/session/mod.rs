pub mod session_route;
