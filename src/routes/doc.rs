use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::CustomerDetails,
    dto::{auth, cart as cart_dto, laptops as laptop_dto},
    middleware::auth::AUTH_COOKIE_NAME,
    models::{Brand, Laptop, LaptopCondition},
    response::{ApiResponse, Meta},
    routes::{admin, cart, health, laptops, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "admin_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        laptops::list_laptops,
        laptops::featured_laptops,
        laptops::new_arrivals,
        laptops::get_laptop,
        laptops::spec_summary,
        laptops::list_brands,
        laptops::popular_brands,
        cart::quote_cart,
        cart::checkout,
        admin::login,
        admin::logout,
        admin::session_status,
        admin::change_credentials,
        admin::list_laptops,
        admin::create_laptop,
        admin::update_laptop,
        admin::delete_laptop
    ),
    components(
        schemas(
            Laptop,
            LaptopCondition,
            Brand,
            CustomerDetails,
            health::HealthData,
            laptop_dto::CreateLaptopRequest,
            laptop_dto::UpdateLaptopRequest,
            laptop_dto::LaptopList,
            laptop_dto::BrandList,
            laptop_dto::SpecSummary,
            cart_dto::CartItemRequest,
            cart_dto::CartQuoteRequest,
            cart_dto::CheckoutRequest,
            cart_dto::CartLineView,
            cart_dto::CartSummary,
            cart_dto::CheckoutLink,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SessionStatus,
            auth::ChangeCredentialsRequest,
            auth::CredentialsUpdate,
            params::Pagination,
            params::ListingTag,
            params::LaptopQuery,
            params::LimitQuery,
            Meta,
            ApiResponse<Laptop>,
            ApiResponse<laptop_dto::LaptopList>,
            ApiResponse<laptop_dto::BrandList>,
            ApiResponse<cart_dto::CartSummary>,
            ApiResponse<cart_dto::CheckoutLink>
        )
    ),
    security(
        ("admin_cookie" = []),
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Laptops", description = "Storefront catalog endpoints"),
        (name = "Cart", description = "Cart pricing and WhatsApp checkout"),
        (name = "Admin", description = "Admin session and catalog management"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
