//! Test helpers.

use std::sync::Arc;

use catalog_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        users::records::UserUuid,
    },
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(id: i64, name: &str, price_cents: i64, active: bool) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_raw(id),
        user: TEST_USER_UUID,
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        active,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn state(products: MockProductsService, auth: MockAuthService) -> Arc<State> {
    State::new(AppContext {
        products: Arc::new(products),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_products_mock(), auth)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_auth_mock())))
            .hoop(inject_user)
            .push(route),
    )
}
