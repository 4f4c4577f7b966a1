diesel::table! {
    profiles (id) {
        id -> Uuid,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        full_name -> Nullable<Varchar>,
        #[max_length = 20]
        phone -> Nullable<Varchar>,
        avatar_url -> Nullable<Text>,
        #[max_length = 20]
        user_type -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    guides (id) {
        id -> Uuid,
        user_id -> Uuid,
        #[max_length = 100]
        village -> Varchar,
        #[max_length = 100]
        district -> Varchar,
        #[max_length = 100]
        state -> Varchar,
        #[max_length = 10]
        pincode -> Varchar,
        specialties -> Array<Text>,
        languages -> Array<Text>,
        #[max_length = 20]
        gender -> Nullable<Varchar>,
        #[max_length = 20]
        years_experience -> Nullable<Varchar>,
        description -> Nullable<Text>,
        hourly_rate -> Int8,
        availability -> Array<Text>,
        gallery_images -> Array<Text>,
        certifications -> Array<Text>,
        is_verified -> Bool,
        is_active -> Bool,
        rating -> Float8,
        total_reviews -> Int4,
        total_bookings -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    bookings (id) {
        id -> Uuid,
        traveler_id -> Uuid,
        guide_id -> Uuid,
        booking_date -> Date,
        booking_time -> Time,
        duration_hours -> Int4,
        number_of_guests -> Int4,
        #[max_length = 100]
        experience_type -> Nullable<Varchar>,
        special_requests -> Nullable<Text>,
        total_amount -> Int8,
        #[max_length = 20]
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    transactions (id) {
        id -> Uuid,
        booking_id -> Nullable<Uuid>,
        payer_id -> Uuid,
        payee_id -> Uuid,
        payment_method_id -> Nullable<Uuid>,
        amount -> Int8,
        #[max_length = 3]
        currency -> Varchar,
        #[max_length = 30]
        transaction_type -> Varchar,
        #[max_length = 20]
        status -> Varchar,
        #[max_length = 50]
        gateway -> Nullable<Varchar>,
        #[max_length = 100]
        gateway_transaction_id -> Nullable<Varchar>,
        description -> Nullable<Text>,
        fees -> Int8,
        net_amount -> Nullable<Int8>,
        processed_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    merchant_accounts (id) {
        id -> Uuid,
        guide_id -> Uuid,
        #[max_length = 20]
        account_type -> Varchar,
        #[max_length = 100]
        bank_name -> Nullable<Varchar>,
        #[max_length = 30]
        account_number -> Nullable<Varchar>,
        #[max_length = 20]
        ifsc_code -> Nullable<Varchar>,
        #[max_length = 100]
        account_holder_name -> Nullable<Varchar>,
        #[max_length = 100]
        upi_id -> Nullable<Varchar>,
        is_verified -> Bool,
        #[max_length = 20]
        verification_status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    payouts (id) {
        id -> Uuid,
        guide_id -> Uuid,
        merchant_account_id -> Uuid,
        amount -> Int8,
        #[max_length = 3]
        currency -> Varchar,
        #[max_length = 20]
        status -> Varchar,
        payout_date -> Nullable<Timestamptz>,
        #[max_length = 100]
        gateway_payout_id -> Nullable<Varchar>,
        transaction_ids -> Array<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    payment_methods (id) {
        id -> Uuid,
        user_id -> Uuid,
        #[max_length = 20]
        method_type -> Varchar,
        #[max_length = 50]
        provider -> Nullable<Varchar>,
        #[max_length = 4]
        last_four -> Nullable<Varchar>,
        #[max_length = 100]
        upi_id -> Nullable<Varchar>,
        is_default -> Bool,
        is_verified -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(guides -> profiles (user_id));
diesel::joinable!(bookings -> guides (guide_id));
diesel::joinable!(merchant_accounts -> guides (guide_id));
diesel::joinable!(payouts -> merchant_accounts (merchant_account_id));
diesel::joinable!(payment_methods -> profiles (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    profiles,
    guides,
    bookings,
    transactions,
    merchant_accounts,
    payouts,
    payment_methods,
);
