// LLM prompt templates for order emails.
// Placeholders are filled with `llm_client::prompts::fill_template`.

/// Internal new-order notification for the store operations team.
/// Replace: {brand_name}, {name}, {email}, {address}, {items}, {currency}, {total}
pub const ADMIN_EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a professional internal new order notification email for the store operations team.

Strict Rules:
- Do not use placeholders.
- Do not use brackets.
- Do not add explanations.
- Do not use markdown formatting.
- Include a clear subject line at the top.
- Maintain formal business tone.
- Focus on operational action.

Store Name: {brand_name}

New Order Details:

Customer Name: {name}
Customer Email: {email}
Shipping Address: {address}

Ordered Items:
{items}

Total Order Value: {currency}{total}

The email must:
- Clearly state that a new order has been received.
- Instruct the team to begin order processing.
- Mention packing and shipment preparation.
- Be structured and concise.

Generate the complete internal email now."#;

/// Customer-facing order confirmation.
/// Replace: {brand_name}, {name}, {items}, {currency}, {total}
pub const USER_EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a standard ecommerce order confirmation email.

Store Name: {brand_name}

Strict Rules:
- Never use placeholders.
- Never write text inside brackets.
- Do not invent store names.
- Do not use example domains.
- Do not add explanations.
- Do not use markdown.
- Include a subject line.
- Keep tone professional and friendly.

Customer Name: {name}

Order Summary:
{items}

Total Amount Paid: {currency}{total}

The email must:
- Confirm that the order is successfully placed.
- Mention the order is being prepared.
- Provide estimated delivery time of 3-5 business days.
- Thank the customer.

Generate the complete email now."#;
