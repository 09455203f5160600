use crate::api::graphql::errors::to_graphql_error;
use crate::api::graphql::inputs::{CustomerInput, OrderInput, ProductInput};
use crate::api::graphql::types::{
    BulkCreateCustomersPayload, CreateCustomerPayload, CreateOrderPayload, CreateProductPayload,
    CustomerType, OrderType, ProductType, UpdateLowStockProductsPayload,
};
use crate::services::CrmServices;
use crate::services::customer_service::CUSTOMER_CREATED_MESSAGE;
use async_graphql::{Context, Object, Result};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_customer(
        &self,
        ctx: &Context<'_>,
        input: CustomerInput,
    ) -> Result<CreateCustomerPayload> {
        let services = ctx.data::<CrmServices>()?;
        let customer = services
            .customers
            .create_customer(input.into())
            .await
            .map_err(to_graphql_error)?;

        Ok(CreateCustomerPayload {
            customer: CustomerType::from(customer),
            message: CUSTOMER_CREATED_MESSAGE.to_string(),
        })
    }

    /// Creates each customer independently; rejected entries are listed in
    /// `errors` and do not stop the rest of the batch.
    async fn bulk_create_customers(
        &self,
        ctx: &Context<'_>,
        input: Vec<CustomerInput>,
    ) -> Result<BulkCreateCustomersPayload> {
        let services = ctx.data::<CrmServices>()?;
        let outcome = services
            .customers
            .bulk_create_customers(input.into_iter().map(Into::into).collect())
            .await;

        Ok(BulkCreateCustomersPayload {
            customers: outcome.customers.into_iter().map(CustomerType::from).collect(),
            errors: outcome.errors,
        })
    }

    async fn create_product(
        &self,
        ctx: &Context<'_>,
        input: ProductInput,
    ) -> Result<CreateProductPayload> {
        let services = ctx.data::<CrmServices>()?;
        let product = services
            .products
            .create_product(input.into())
            .await
            .map_err(to_graphql_error)?;

        Ok(CreateProductPayload {
            product: ProductType::from(product),
        })
    }

    async fn create_order(
        &self,
        ctx: &Context<'_>,
        input: OrderInput,
    ) -> Result<CreateOrderPayload> {
        let services = ctx.data::<CrmServices>()?;
        let order = services
            .orders
            .create_order(input.into())
            .await
            .map_err(to_graphql_error)?;

        Ok(CreateOrderPayload {
            order: OrderType::from(order),
        })
    }

    /// Restocks every product whose stock is below 10 by 10 units.
    async fn update_low_stock_products(
        &self,
        ctx: &Context<'_>,
    ) -> Result<UpdateLowStockProductsPayload> {
        let services = ctx.data::<CrmServices>()?;
        let updated = services
            .products
            .restock_low_stock()
            .await
            .map_err(to_graphql_error)?;

        Ok(UpdateLowStockProductsPayload {
            message: format!("Updated {} low-stock product(s).", updated.len()),
            updated_products: updated.into_iter().map(ProductType::from).collect(),
        })
    }
}
